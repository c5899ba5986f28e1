//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the standard
//! setup, with an optional seeded random opening prefix so that
//! deterministic engines do not replay the same game every time.

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{Position, Side};
use crate::move_generation::legal_move_apply::play_turn;
use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWin,
    DarkWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Turns played after the opening before the game is scored a draw.
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub search_params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            search_params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves: Vec<String>,
    /// Played turns, hops of a multi-hop turn joined by spaces.
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard setup.
pub fn play_engine_match(
    mut engine_light: Box<dyn Engine>,
    mut engine_dark: Box<dyn Engine>,
    seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    play_engine_match_from_position(
        Position::new_game(),
        engine_light.as_mut(),
        engine_dark.as_mut(),
        seed,
        config,
    )
}

/// Play a match from `start`. The random opening is applied on top of it.
pub fn play_engine_match_from_position(
    start: Position,
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    let generator = SpanishMoveGenerator;
    engine_light.new_game();
    engine_dark.new_game();

    let (mut position, opening_moves) = apply_seeded_random_opening(
        &generator,
        &start,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_position: position,
        opening_moves,
        played_moves: Vec::new(),
        light_move_count: 0,
        dark_move_count: 0,
        light_total_time_ns: 0,
        dark_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        let mover = position.side_to_move;
        let legal_moves = generator.generate_legal_moves(&position);
        if legal_moves.is_empty() {
            result.outcome = match mover {
                Side::Light => MatchOutcome::DarkWin,
                Side::Dark => MatchOutcome::LightWin,
            };
            break;
        }

        let started = Instant::now();
        let out = match mover {
            Side::Light => engine_light.choose_move(&position, &config.search_params)?,
            Side::Dark => engine_dark.choose_move(&position, &config.search_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::Light => {
                result.light_move_count = result.light_move_count.saturating_add(1);
                result.light_total_time_ns = result.light_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Dark => {
                result.dark_move_count = result.dark_move_count.saturating_add(1);
                result.dark_total_time_ns = result.dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(DraughtsError::NoMoveProduced)?;
        if !legal_moves.contains(&chosen) {
            return Err(DraughtsError::IllegalMove(chosen.to_string()));
        }

        let turn = play_turn(&generator, &position, &chosen)?;
        result.played_moves.push(join_hops(&turn.hops));
        position = turn.position;
    }

    result.final_position = position;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> DraughtsResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        debug!(
            "game {}/{} seed={seed} player1 plays {}",
            i + 1,
            config.games,
            if player1_is_light { Side::Light } else { Side::Dark }
        );

        let result = if player1_is_light {
            play_engine_match(player1_factory(), player2_factory(), seed, &config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_light {
            (
                result.light_move_count,
                result.dark_move_count,
                result.light_total_time_ns,
                result.dark_total_time_ns,
            )
        } else {
            (
                result.dark_move_count,
                result.light_move_count,
                result.dark_total_time_ns,
                result.light_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner = match result.outcome {
            MatchOutcome::LightWin => Some(Side::Light),
            MatchOutcome::DarkWin => Some(Side::Dark),
            MatchOutcome::DrawMaxPlies => None,
        };
        match winner {
            Some(side) if (side == Side::Light) == player1_is_light => stats.player1_wins += 1,
            Some(_) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }

        info!(
            "game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            result.outcome,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn join_hops(hops: &[crate::moves::move_description::Move]) -> String {
    hops.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply_seeded_random_opening<G: MoveGenerator>(
    generator: &G,
    initial: &Position,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> DraughtsResult<(Position, Vec<String>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = *initial;
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = generator.generate_legal_moves(&position);
        let Some(chosen) = legal_moves.choose(&mut rng) else {
            break;
        };
        let turn = play_turn(generator, &position, chosen)?;
        opening_moves.push(join_hops(&turn.hops));
        position = turn.position;
    }

    Ok((position, opening_moves))
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_position, play_engine_match_series,
        MatchConfig, MatchOutcome, MatchSeriesConfig,
    };
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::draughts_types::{Position, Side};

    #[test]
    fn engine_match_harness_runs_random_vs_greedy() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(1)),
            Box::new(GreedyEngine::with_seed(2)),
            42,
            &MatchConfig {
                max_plies: 40,
                opening_min_plies: 2,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!((2..=4).contains(&result.opening_moves.len()));
        assert!(result.light_move_count + result.dark_move_count > 0);
        assert_eq!(
            result.played_moves.len() as u32,
            result.light_move_count + result.dark_move_count
        );
    }

    #[test]
    fn side_without_moves_loses_the_match() {
        let start = Position::from_layout("8/8/8/8/8/8/1d6/l1l5 d").expect("layout should parse");
        let mut light = RandomEngine::with_seed(3);
        let mut dark = RandomEngine::with_seed(4);
        let result = play_engine_match_from_position(
            start,
            &mut light,
            &mut dark,
            0,
            &MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::LightWin);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn capturing_the_last_piece_ends_the_match() {
        // Light king against a lone dark man that it can take at once.
        let start = Position::from_layout("8/8/8/8/3d4/8/8/6L1 l").expect("layout should parse");
        let mut light = MinimaxEngine::new(2);
        let mut dark = RandomEngine::with_seed(5);
        let result = play_engine_match_from_position(
            start,
            &mut light,
            &mut dark,
            0,
            &MatchConfig {
                max_plies: 4,
                opening_min_plies: 0,
                opening_max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::LightWin);
        assert_eq!(result.final_position.piece_count(Side::Dark), 0);
    }

    #[test]
    fn engine_match_series_aggregates_per_player() {
        let stats = play_engine_match_series(
            || Box::new(GreedyEngine::with_seed(11)),
            || Box::new(MinimaxEngine::new(1)),
            &MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 16,
                    ..MatchConfig::default()
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        assert!(stats.player1_moves + stats.player2_moves > 0);
        assert!(stats.report().starts_with("games=3 "));
    }
}
