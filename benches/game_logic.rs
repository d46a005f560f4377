use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Frame, GameSession};
use blockfall::term::{FrameBuffer, GameView, Hud, Viewport};
use blockfall::types::Shape;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameSession::with_seed(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !state.tick() && state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 18..22 {
                for x in 0..10 {
                    board.set(x, y, Some(Shape::I));
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameSession::with_seed(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.hard_drop());
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameSession::with_seed(12345);
    state.tick();
    state.tick();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate(true);
        })
    });
}

fn bench_frame_and_view(c: &mut Criterion) {
    let state = GameSession::with_seed(12345);
    let view = GameView::default();
    let mut frame = Frame::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("frame_into_render_into", |b| {
        b.iter(|| {
            state.frame_into(&mut frame);
            view.render_into(&frame, &Hud::default(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_rotate,
    bench_frame_and_view
);
criterion_main!(benches);
