//! Errors used throughout the draughts engine.
//!
//! `DraughtsError` is the single error type returned by game logic, parsing
//! utilities, engines and the turn orchestrator. Variants that describe
//! invalid input (bad coordinates, malformed layouts, unknown options) are
//! recoverable and suitable for presenting to users. `InvariantViolation`
//! means the generator and applier disagree about the board and indicates a
//! bug; callers should not try to recover from it.

use thiserror::Error;

use crate::game_state::draughts_types::{Side, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// A move or selection started on an empty square.
    #[error("no piece on square {0}")]
    NoPieceAtSquare(Square),

    /// The piece on the origin square belongs to the side not on move.
    #[error("piece on {square} belongs to {owner}, but {to_move} is to move")]
    WrongSideToMove {
        square: Square,
        owner: Side,
        to_move: Side,
    },

    /// The move is not in the current legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Generator and applier disagree about the board.
    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),

    /// Layout string could not be parsed.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Square or move notation could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// Unknown difficulty or play mode name.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Unknown or malformed engine option.
    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },

    /// An action was requested after the game finished.
    #[error("game is already over")]
    GameOver,

    /// The automated side was asked to move when it is not its turn.
    #[error("it is not the automated side's turn")]
    NotAutomatedTurn,

    /// Engine finished without producing a move while legal moves exist.
    #[error("engine produced no move")]
    NoMoveProduced,
}

/// Result alias used across the crate.
pub type DraughtsResult<T> = Result<T, DraughtsError>;
