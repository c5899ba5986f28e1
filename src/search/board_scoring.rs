//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternate heuristics
//! can be swapped without touching the search code. The shipped scorer is
//! pure material: a king counts double a man, no positional terms.

use crate::game_state::draughts_rules::{KING_VALUE, MAN_VALUE};
use crate::game_state::draughts_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`'s point of view: positive is good for it.
    fn score(&self, position: &Position, perspective: Side) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(rank: Rank) -> i32 {
        match rank {
            Rank::Man => MAN_VALUE,
            Rank::King => KING_VALUE,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position, perspective: Side) -> i32 {
        position
            .board
            .pieces()
            .map(|(_, piece)| {
                let value = Self::piece_value(piece.rank);
                if piece.owner == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
