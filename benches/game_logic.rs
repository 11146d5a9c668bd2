use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dino::core::{GameConfig, GameSnapshot, GameState};
use tui_dino::term::{FrameBuffer, GameView, Viewport};
use tui_dino::types::{Action, HeldActions};

fn busy_state() -> GameState {
    let mut state = GameState::new(
        GameConfig::default()
            .with_columns(64)
            .with_spawn_cooldown(u32::MAX, u32::MAX),
    )
    .unwrap();
    for offset in (2..64).step_by(3) {
        state.spawn_obstacle_at(offset);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let jump = HeldActions::empty().with(Action::Jump);

    c.bench_function("game_tick", |b| {
        b.iter_batched(
            busy_state,
            |mut state| {
                for t in 0..16u64 {
                    state.tick(black_box(jump), t * 80);
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = busy_state();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = busy_state().snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(220, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_render);
criterion_main!(benches);
