/// Heading block type with owned prefix constant.
///
/// Only the third-level prefix is recognised. `# ` and `## ` lines are
/// plain paragraphs.
pub struct Heading;

impl Heading {
    /// The literal prefix that opens a heading line.
    pub const PREFIX: &'static str = "### ";

    /// Returns the heading content if `line` starts with [`Heading::PREFIX`] at column 0.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
