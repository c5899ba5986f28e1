//! Difficulty tiers and play modes.
//!
//! Maps the user-facing difficulty setting to the engine implementing it.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::DraughtsError;

/// Search depth used by the hard tier.
pub const HARD_SEARCH_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Uniform random over the legal moves.
    Easy,
    /// Random capture if any, otherwise random move.
    Medium,
    /// Depth-4 minimax.
    #[default]
    Hard,
}

impl FromStr for Difficulty {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DraughtsError::UnknownDifficulty(s.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Who drives each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Both sides are driven by input.
    PlayerVsPlayer,
    /// One side is automated at the given difficulty.
    VsComputer(Difficulty),
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::VsComputer(Difficulty::default())
    }
}

impl FromStr for PlayMode {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pvp") {
            return Ok(PlayMode::PlayerVsPlayer);
        }
        s.parse::<Difficulty>().map(PlayMode::VsComputer)
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::PlayerVsPlayer => f.write_str("pvp"),
            PlayMode::VsComputer(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

pub fn build_engine(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::new()),
        Difficulty::Medium => Box::new(GreedyEngine::new()),
        Difficulty::Hard => Box::new(MinimaxEngine::new(HARD_SEARCH_DEPTH)),
    }
}
