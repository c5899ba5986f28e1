//! Perft node counting over complete turns.
//!
//! One node is one complete turn (chosen move plus forced continuations),
//! so counts validate both generation and continuation handling.

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::Position;
use crate::move_generation::legal_move_apply::play_turn;
use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Turns that needed at least one forced continuation.
    pub continuations: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.continuations += rhs.continuations;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> DraughtsResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        let turn = play_turn(generator, position, &mv)?;
        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
            if turn.applied.promoted {
                total.promotions += 1;
            }
            if turn.hops.len() > 1 {
                total.continuations += 1;
            }
        } else {
            total.merge(perft(generator, &turn.position, depth - 1)?);
        }
    }

    Ok(total)
}

/// Perft with the standard Spanish generator.
pub fn perft_legal(position: &Position, depth: u8) -> DraughtsResult<PerftCounts> {
    perft(&SpanishMoveGenerator, position, depth)
}
