use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_draughts::game_state::draughts_rules::STARTING_POSITION_LAYOUT;
use plum_draughts::game_state::draughts_types::Position;
use plum_draughts::move_generation::perft::perft_legal;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    /// Known node counts, starting at depth 1.
    expected_nodes: &'static [usize],
    /// Deepest depth benchmarked; depths past `expected_nodes` are checked
    /// against their own warmup run.
    max_depth: u8,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_POSITION_LAYOUT,
        expected_nodes: &[7, 49],
        max_depth: 4,
    },
    BenchCase {
        name: "kings_midgame",
        layout: "1d1d4/4d1d1/1d3L2/8/3l4/l1D3l1/3l4/2l5 l",
        expected_nodes: &[],
        max_depth: 3,
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_POSITION_LAYOUT,
        expected_nodes: &[7, 49],
        max_depth: 7,
    },
    BenchCase {
        name: "kings_midgame",
        layout: "1d1d4/4d1d1/1d3L2/8/3l4/l1D3l1/3l4/2l5 l",
        expected_nodes: &[],
        max_depth: 5,
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = Position::from_layout(case.layout).expect("benchmark layout should parse");

        for depth in 1..=case.max_depth {
            // Correctness guard before benchmarking.
            let warmup = perft_legal(&game, depth).expect("perft should run");
            if let Some(expected) = case.expected_nodes.get(usize::from(depth) - 1) {
                assert_eq!(
                    warmup.nodes, *expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }
            let expected_nodes = warmup.nodes;

            group.throughput(Throughput::Elements(expected_nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                &expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
