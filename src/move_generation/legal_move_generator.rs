//! Legal move selection under Spanish rules.
//!
//! Gathers capture chains for every piece of the side to move. If any exist,
//! capturing is mandatory and only the chains capturing the most pieces, and
//! among those the most kings, are legal; the filter is applied across all of
//! the side's pieces at once. Without captures every simple move is legal.

use crate::game_state::draughts_types::*;
use crate::move_generation::capture_sequences::generate_capture_sequences;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::simple_moves::generate_simple_moves;
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishMoveGenerator;

impl MoveGenerator for SpanishMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move> {
        generate_legal_moves_for(&position.board, position.side_to_move)
    }

    fn generate_continuations(&self, board: &Board, from: Square) -> Vec<Move> {
        retain_highest_precedence(generate_capture_sequences(board, from))
    }
}

/// Legal move set for `side` on `board`, pieces visited in row-major order.
pub fn generate_legal_moves_for(board: &Board, side: Side) -> Vec<Move> {
    let captures: Vec<Move> = board
        .squares_of(side)
        .flat_map(|sq| generate_capture_sequences(board, sq))
        .collect();

    if !captures.is_empty() {
        return retain_highest_precedence(captures);
    }

    board
        .squares_of(side)
        .flat_map(|sq| generate_simple_moves(board, sq))
        .collect()
}

/// Keep the longest sequences, then among them those capturing most kings.
/// Relative order of the survivors is preserved.
pub fn retain_highest_precedence(mut moves: Vec<Move>) -> Vec<Move> {
    let Some(best) = moves.iter().map(Move::precedence).max() else {
        return moves;
    };
    moves.retain(|mv| mv.precedence() == best);
    moves
}

/// Whether `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.squares_of(side).any(|sq| {
        !generate_simple_moves(board, sq).is_empty()
            || !generate_capture_sequences(board, sq).is_empty()
    })
}
