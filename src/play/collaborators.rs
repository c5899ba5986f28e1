//! Interfaces to the game's external collaborators.
//!
//! The orchestrator never draws, plays sounds or prints status itself. It
//! reports every committed state change to a `GameObserver`, which a front
//! end implements to drive its board view, audio cues and score text.

use log::{debug, trace};

use crate::game_state::draughts_types::{Board, Side, Square};
use crate::utils::render_game_state::render_board;

/// Audio cue emitted after each committed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Move,
    Capture,
    Win,
}

/// Snapshot for score and status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub side_to_move: Side,
    pub light_pieces: usize,
    pub dark_pieces: usize,
    pub running: bool,
    pub winner: Option<Side>,
    /// The side to move is driven by an engine.
    pub automated_to_move: bool,
}

pub trait GameObserver {
    /// Current board plus the squares the selected piece may move to.
    fn render(&mut self, _board: &Board, _legal_targets: &[Square]) {}

    fn audio_cue(&mut self, _cue: AudioCue) {}

    fn status(&mut self, _status: &GameStatus) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Observer that forwards notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn render(&mut self, board: &Board, legal_targets: &[Square]) {
        trace!("board\n{}", render_board(board, legal_targets));
    }

    fn audio_cue(&mut self, cue: AudioCue) {
        debug!("audio cue {cue:?}");
    }

    fn status(&mut self, status: &GameStatus) {
        match (status.running, status.winner) {
            (false, Some(winner)) => debug!("game over, {winner} wins"),
            _ => debug!(
                "{} to move, light {} dark {}",
                status.side_to_move, status.light_pieces, status.dark_pieces
            ),
        }
    }
}
