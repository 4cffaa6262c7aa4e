// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "### Week summary\n\nRead **chapter 3** and *skim* chapter 4.\n- slides: https://cdn.example/w3.pdf\n- [Forum thread](https://forum.example/t/7)\n\n";
    base.repeat(size)
}
