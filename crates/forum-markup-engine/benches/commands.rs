use criterion::{Criterion, criterion_group, criterion_main};
use forum_markup_engine::{Cmd, Draft, Selection, ToolbarAction};
mod common;

fn bench_typing_with_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let content = common::generate_post(10);
    group.bench_function("insert_and_render", |b| {
        b.iter(|| {
            let mut draft = Draft::new(content.clone());
            for ch in "hello".chars() {
                draft.apply(Cmd::InsertText(ch.to_string())).unwrap();
                std::hint::black_box(draft.render());
            }
        });
    });

    group.bench_function("toolbar_wrap", |b| {
        b.iter(|| {
            let mut draft = Draft::new(content.clone());
            draft.apply(Cmd::Select(Selection::new(0, 16))).unwrap();
            std::hint::black_box(draft.apply(Cmd::Toolbar(ToolbarAction::Bold)).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_typing_with_preview);
criterion_main!(benches);
