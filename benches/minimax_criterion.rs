use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::search::minimax::MinMax;

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    black: &'static [usize],
    white: &'static [usize],
    kings: &'static [usize],
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "opening",
        black: &[5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17],
        white: &[28, 29, 30, 31, 32, 33, 34, 35, 37, 38, 39, 40],
        kings: &[],
    },
    SearchCase {
        name: "kings_endgame",
        black: &[15, 20, 37],
        white: &[24, 33, 8],
        kings: &[37, 8],
    },
];

fn bench_minimax(c: &mut Criterion) {
    let depth = std::env::var("PLUM_CHECKERS_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(2)
        .max(1);

    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = Board::from_squares(case.black, case.white, case.kings)
            .expect("benchmark position should be valid");
        let search = MinMax::new(Color::Black, depth);

        // Correctness guard before benchmarking.
        let chosen = search
            .best_move_with_rng(&board, &mut StdRng::seed_from_u64(0))
            .expect("black should have an action");
        assert!(board.get_black_actions().contains(&chosen));

        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &board,
            |b, board| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| {
                    let next = search
                        .best_move_with_rng(black_box(board), &mut rng)
                        .expect("search should succeed");
                    black_box(next)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(minimax_benches, bench_minimax);
criterion_main!(minimax_benches);
