use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    black: &'static [usize],
    white: &'static [usize],
    kings: &'static [usize],
    expected_nodes: &'static [usize],
}

const OPENING_QUICK: &[usize] = &[7, 49, 302];
const OPENING_STANDARD: &[usize] = &[7, 49, 302, 1469, 7361];

fn opening_case(expected_nodes: &'static [usize]) -> BenchCase {
    BenchCase {
        name: "opening",
        black: &[5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17],
        white: &[28, 29, 30, 31, 32, 33, 34, 35, 37, 38, 39, 40],
        kings: &[],
        expected_nodes,
    }
}

fn selected_cases() -> Vec<BenchCase> {
    match std::env::var("PLUM_CHECKERS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => vec![opening_case(OPENING_STANDARD)],
        _ => vec![opening_case(OPENING_QUICK)],
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = Board::from_squares(case.black, case.white, case.kings)
            .expect("benchmark position should be valid");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&board, Color::Black, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&board), Color::Black, black_box(depth));
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
