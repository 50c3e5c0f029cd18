//! `othello_core::engine` の性能計測（反転探索、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面（黒番）での代表的な合法手を返す。
const fn initial_black_move_square() -> Option<engine::Square> {
    engine::Square::from_xy(3, 2)
}

/// `Board::captured_stones` を計測する。
fn bench_captured_stones(criterion: &mut Criterion) {
    let square_opt = initial_black_move_square();
    let square = match square_opt {
        Some(value) => value,
        None => return,
    };

    let board = engine::Board::initial();
    criterion.bench_function("engine/captured_stones_initial", |bench| {
        bench.iter(|| black_box(board.captured_stones(engine::Color::Black, square)));
    });
}

/// `Game::place_stone` を計測する。
fn bench_place_stone(criterion: &mut Criterion) {
    let square_opt = initial_black_move_square();
    let square = match square_opt {
        Some(value) => value,
        None => return,
    };

    criterion.bench_function("engine/place_stone_initial", |bench| {
        bench.iter_batched(
            engine::Game::initial,
            |mut game| black_box(game.place_stone(engine::Color::Black, square)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_captured_stones(&mut criterion);
    bench_place_stone(&mut criterion);

    criterion.final_summary();
}
