//! Engine abstraction layer used by the turn orchestrator and match harness.
//!
//! Defines common request parameters and output payloads so the move-choice
//! policy of each difficulty tier can be selected at runtime behind a single
//! trait object.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::Position;
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's configured search depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> DraughtsResult<()> {
        Err(DraughtsError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Choose a move for the side to move. `best_move` is `None` only when the
    /// side to move has no legal move.
    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> DraughtsResult<EngineOutput>;
}

/// Parse a `Seed` option value shared by the random-choice engines.
pub(crate) fn parse_seed(name: &str, value: &str) -> DraughtsResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| DraughtsError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
