use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_draughts::game_state::draughts_rules::STARTING_POSITION_LAYOUT;
use plum_draughts::game_state::draughts_types::Position;
use plum_draughts::move_generation::legal_move_generator::SpanishMoveGenerator;
use plum_draughts::search::board_scoring::MaterialScorer;
use plum_draughts::search::minimax::{search_best_move, SearchConfig};

#[derive(Clone, Copy)]
struct PerfCase {
    name: &'static str,
    layout: &'static str,
}

const CASES: &[PerfCase] = &[
    PerfCase {
        name: "start",
        layout: STARTING_POSITION_LAYOUT,
    },
    PerfCase {
        name: "kings_midgame",
        layout: "1d1d4/4d1d1/1d3L2/8/3l4/l1D3l1/3l4/2l5 l",
    },
    PerfCase {
        name: "flying_kings",
        layout: "1D6/8/8/4d3/8/2l5/8/6L1 d",
    },
];

fn bench_search(c: &mut Criterion) {
    let max_depth = std::env::var("PLUM_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(4)
        .max(2);

    let mut group = c.benchmark_group("minimax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let scorer = MaterialScorer;
    let generator = SpanishMoveGenerator;

    for case in CASES {
        let game = Position::from_layout(case.layout).expect("benchmark layout should parse");
        for depth in 2..=max_depth {
            group.bench_with_input(
                BenchmarkId::new(case.name, format!("d{depth}")),
                &game,
                |b, game| {
                    b.iter(|| {
                        let result = search_best_move(
                            black_box(game),
                            black_box(&generator),
                            black_box(&scorer),
                            black_box(SearchConfig {
                                depth,
                                ..SearchConfig::default()
                            }),
                        )
                        .expect("search should run");
                        black_box(result.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
