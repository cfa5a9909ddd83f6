use criterion::{black_box, criterion_group, criterion_main, Criterion};

use promo_reel::{
    animation::{spring, SpringConfig, Typewriter},
    composition::ReelEngine,
    config::Config,
    scenes::SceneRegistry,
};

fn bench_primitives(c: &mut Criterion) {
    let config = SpringConfig::new(20.0, 200.0);
    c.bench_function("spring", |b| b.iter(|| spring(black_box(42.0), 30.0, &config)));

    let typewriter = Typewriter::new("npx @orchestra-research/ai-research-skills").chars_per_frame(0.8);
    c.bench_function("typewriter", |b| b.iter(|| typewriter.reveal(black_box(30))));
}

fn bench_frames(c: &mut Criterion) {
    let engine = ReelEngine::new(Config::default(), &SceneRegistry::new()).unwrap();

    c.bench_function("render_frame", |b| b.iter(|| engine.render_frame(black_box(300))));
    c.bench_function("render_full_range", |b| {
        b.iter(|| engine.render_range(engine.full_range()).unwrap())
    });
}

criterion_group!(benches, bench_primitives, bench_frames);
criterion_main!(benches);
