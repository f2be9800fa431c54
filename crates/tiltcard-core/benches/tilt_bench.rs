//! Benchmarks for the per-frame work of a tilt card
//!
//! Run with: cargo bench -p tiltcard-core
//!
//! Everything here runs once per animation frame, so it must stay far below
//! a 16 ms frame budget:
//! - Style derivation
//! - Spring stepping
//! - A full drag-and-release cycle

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tiltcard_core::{
    CardConfig, MotionModel, PanEvent, SpringConfig, SpringState, Tilt, TiltController,
    TiltStyle, FRAME_INTERVAL,
};

// ============================================================================
// Style Benchmarks
// ============================================================================

fn bench_style_derive(c: &mut Criterion) {
    let config = CardConfig::default();
    let mut group = c.benchmark_group("style_derive");

    group.bench_function("neutral", |b| {
        b.iter(|| black_box(TiltStyle::derive(black_box(Tilt::ZERO), &config)))
    });

    group.bench_function("overshooting", |b| {
        b.iter(|| black_box(TiltStyle::derive(black_box(Tilt::new(-30.0, 45.0)), &config)))
    });

    group.bench_function("to_css", |b| {
        let style = TiltStyle::derive(Tilt::new(4.0, -7.0), &config);
        b.iter(|| {
            black_box(style.card.to_css());
            black_box(style.content.to_css());
            black_box(style.sheen.to_css());
        })
    });

    group.finish();
}

// ============================================================================
// Spring Benchmarks
// ============================================================================

fn bench_spring(c: &mut Criterion) {
    let config = SpringConfig::default();
    let dt = FRAME_INTERVAL.as_secs_f32();

    c.bench_function("spring_single_step", |b| {
        b.iter_batched(
            || {
                let mut state = SpringState::at_rest(12.0);
                state.retarget(0.0);
                state
            },
            |mut state| black_box(state.step(&config, dt)),
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("spring_settle_from_max", |b| {
        b.iter(|| {
            let mut state = SpringState::at_rest(12.0);
            state.retarget(0.0);
            while state.step(&config, dt) {}
            black_box(state)
        })
    });
}

// ============================================================================
// Controller Benchmarks
// ============================================================================

fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_cycle");

    for motion in [MotionModel::ReleaseOnly, MotionModel::Continuous] {
        group.bench_function(motion.as_str(), |b| {
            b.iter(|| {
                let mut card = TiltController::new(CardConfig {
                    motion,
                    ..CardConfig::default()
                });
                card.handle(PanEvent::Begin {
                    pointer_id: 1,
                    x: 0.0,
                    y: 0.0,
                });
                for i in 0..30 {
                    card.handle(PanEvent::Update {
                        pointer_id: 1,
                        x: i as f32 * 3.0,
                        y: i as f32 * -2.0,
                    });
                    card.tick(FRAME_INTERVAL);
                    black_box(card.style());
                }
                card.handle(PanEvent::End { pointer_id: 1 });
                while card.tick(FRAME_INTERVAL) {
                    black_box(card.style());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_style_derive, bench_spring, bench_drag_cycle);
criterion_main!(benches);
