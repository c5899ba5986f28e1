use crate::game_state::draughts_types::{Board, Position, Square};
use crate::moves::move_description::Move;

/// Source of legal moves for search, perft and the turn orchestrator.
pub trait MoveGenerator: Send + Sync {
    /// Legal move set for the side to move in `position`.
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move>;

    /// Capture continuations the piece on `from` must choose between after a
    /// capturing move landed there. Empty when the turn is complete.
    fn generate_continuations(&self, board: &Board, from: Square) -> Vec<Move>;
}
