//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- hard medium --games 20 --seed 7`
//!
//! Per-game results are logged at `info`; set `RUST_LOG=info` to see them.

use log::info;

use plum_draughts::engines::difficulty::{build_engine, Difficulty};
use plum_draughts::errors::{DraughtsError, DraughtsResult};
use plum_draughts::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> DraughtsResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut difficulties = Vec::new();
    let mut config = MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            ..MatchConfig::default()
        },
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--games" => config.games = parse_number(&arg, args.next())?,
            "--seed" => config.base_seed = parse_number(&arg, args.next())?,
            "--max-plies" => config.per_game.max_plies = parse_number(&arg, args.next())?,
            other => difficulties.push(other.parse::<Difficulty>()?),
        }
    }
    let player1 = difficulties.first().copied().unwrap_or(Difficulty::Hard);
    let player2 = difficulties.get(1).copied().unwrap_or(Difficulty::Medium);
    info!("player1={player1} player2={player2} games={}", config.games);

    let stats = play_engine_match_series(
        || build_engine(player1),
        || build_engine(player2),
        &config,
    )?;

    println!("{}", stats.report());
    Ok(())
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> DraughtsResult<T> {
    let value = value.unwrap_or_default();
    value.parse::<T>().map_err(|_| DraughtsError::InvalidOption {
        name: flag.to_owned(),
        value,
    })
}
