//! Live-game state machine.
//!
//! `TurnOrchestrator` owns the authoritative position. Input arrives as
//! square clicks through `select_square`; the automated side, when there is
//! one, moves through `play_automated_turn`. A capturing move that can be
//! continued keeps the turn with the same piece until no continuation is
//! left, after which the side flips and the terminal condition is checked
//! for the side now to move.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::engines::difficulty::{build_engine, PlayMode};
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::{
    apply_move, play_turn, select_continuation, AppliedMove,
};
use crate::move_generation::legal_move_generator::{has_legal_move, SpanishMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;
use crate::play::collaborators::{AudioCue, GameObserver, GameStatus, NullObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: PlayMode,
    /// Side driven by the engine in `PlayMode::VsComputer`.
    pub automated_side: Side,
    /// Play the automated reply as soon as an interactive turn completes.
    pub auto_reply: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::default(),
            automated_side: Side::Dark,
            auto_reply: true,
        }
    }
}

/// One committed hop in the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Turn number, shared by every hop of a multi-hop turn.
    pub turn: u32,
    pub side: Side,
    pub notation: String,
    pub captured: usize,
    pub committed_at: DateTime<Utc>,
}

/// Result of a square click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed: game over, engine's turn, off-board click, or a click
    /// away from a pending continuation.
    Ignored,
    Selected { square: Square, targets: Vec<Square> },
    Deselected,
    /// A move was committed. `turn_complete` is false while the same piece
    /// still has to continue capturing.
    Committed {
        applied: AppliedMove,
        turn_complete: bool,
    },
}

pub struct TurnOrchestrator<O: GameObserver = NullObserver> {
    config: GameConfig,
    generator: SpanishMoveGenerator,
    engine: Option<Box<dyn Engine>>,
    observer: O,
    position: Position,
    running: bool,
    winner: Option<Side>,
    selected: Option<Square>,
    /// Legal moves of the selected piece, or its continuations.
    targets: Vec<Move>,
    pending_continuation: Option<Square>,
    turn: u32,
    history: Vec<TurnRecord>,
}

impl TurnOrchestrator<NullObserver> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: GameObserver> TurnOrchestrator<O> {
    pub fn with_observer(config: GameConfig, observer: O) -> Self {
        let mut game = Self {
            config,
            generator: SpanishMoveGenerator,
            engine: engine_for(config.mode),
            observer,
            position: Position::new_game(),
            running: true,
            winner: None,
            selected: None,
            targets: Vec::new(),
            pending_continuation: None,
            turn: 1,
            history: Vec::new(),
        };
        game.restart();
        game
    }

    /// Standard setup with the non-automated side to move first.
    pub fn restart(&mut self) {
        let mut position = Position::new_game();
        position.side_to_move = match self.config.mode {
            PlayMode::PlayerVsPlayer => Side::Light,
            PlayMode::VsComputer(_) => self.config.automated_side.opposite(),
        };
        if let Some(engine) = self.engine.as_mut() {
            engine.new_game();
        }
        info!("new game, mode {}", self.config.mode);
        self.load(position);
    }

    /// Continue from an arbitrary position. The game ends at once if the side
    /// to move is already lost; with `auto_reply` an automated side to move
    /// plays straight away.
    pub fn set_position(&mut self, position: Position) -> DraughtsResult<()> {
        debug!("loading position {}", position.layout());
        self.load(position);
        self.reply_if_automated()
    }

    /// Switch mode or difficulty. With `auto_reply`, an automated side that is
    /// now to move plays at once, finishing any pending capture chain.
    pub fn set_mode(&mut self, mode: PlayMode) -> DraughtsResult<()> {
        info!("mode {} -> {mode}", self.config.mode);
        self.config.mode = mode;
        self.engine = engine_for(mode);
        self.report_status();
        self.reply_if_automated()
    }

    /// Replace the automated side's engine, e.g. with a seeded one.
    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = Some(engine);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn pending_continuation(&self) -> Option<Square> {
        self.pending_continuation
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn is_automated(&self, side: Side) -> bool {
        matches!(self.config.mode, PlayMode::VsComputer(_)) && side == self.config.automated_side
    }

    /// Moves currently open to the side to move: the pending continuations
    /// while a capture chain is being extended, the full legal set otherwise.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.pending_continuation {
            Some(at) => self.generator.generate_continuations(&self.position.board, at),
            None => self.generator.generate_legal_moves(&self.position),
        }
    }

    /// Destination squares of the selected piece.
    pub fn legal_targets(&self) -> Vec<Square> {
        let mut targets: Vec<Square> = Vec::with_capacity(self.targets.len());
        for mv in &self.targets {
            if !targets.contains(&mv.to) {
                targets.push(mv.to);
            }
        }
        targets
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            side_to_move: self.position.side_to_move,
            light_pieces: self.position.piece_count(Side::Light),
            dark_pieces: self.position.piece_count(Side::Dark),
            running: self.running,
            winner: self.winner,
            automated_to_move: self.running && self.is_automated(self.position.side_to_move),
        }
    }

    /// Handle a click on (`row`, `col`) from the input collaborator.
    pub fn select_square(&mut self, row: i32, col: i32) -> DraughtsResult<Selection> {
        if !self.running || self.is_automated(self.position.side_to_move) {
            return Ok(Selection::Ignored);
        }
        let Some(square) = Square::new(row, col) else {
            debug!("click outside the board at ({row}, {col})");
            return Ok(Selection::Ignored);
        };

        if let Some(mv) = self.target_move(square) {
            return self.commit_interactive(mv);
        }
        if self.pending_continuation.is_some() {
            return Ok(Selection::Ignored);
        }

        match self.position.board.get(square) {
            Some(piece) if piece.owner == self.position.side_to_move => {
                self.selected = Some(square);
                self.targets = self
                    .generator
                    .generate_legal_moves(&self.position)
                    .into_iter()
                    .filter(|mv| mv.from == square)
                    .collect();
                self.render();
                Ok(Selection::Selected {
                    square,
                    targets: self.legal_targets(),
                })
            }
            _ => {
                let had_selection = self.selected.take().is_some();
                self.targets.clear();
                if !had_selection {
                    return Ok(Selection::Ignored);
                }
                self.render();
                Ok(Selection::Deselected)
            }
        }
    }

    /// Let the engine play a full turn for the automated side. Returns the
    /// chosen move followed by any forced continuations. A capture chain left
    /// pending by input is finished with the deterministic continuation rule.
    pub fn play_automated_turn(&mut self) -> DraughtsResult<Vec<Move>> {
        if !self.running {
            return Err(DraughtsError::GameOver);
        }
        let side = self.position.side_to_move;
        if !self.is_automated(side) {
            return Err(DraughtsError::NotAutomatedTurn);
        }
        if let Some(at) = self.pending_continuation {
            return self.finish_continuation(side, at);
        }
        let engine = self.engine.as_mut().ok_or(DraughtsError::NotAutomatedTurn)?;

        let output = engine.choose_move(&self.position, &SearchParams::default())?;
        for line in &output.info_lines {
            debug!("{}: {line}", engine.name());
        }
        let mv = output.best_move.ok_or(DraughtsError::NoMoveProduced)?;

        let played = play_turn(&self.generator, &self.position, &mv)?;
        self.position = played.position;
        for hop in &played.hops {
            self.record_hop(side, hop);
        }
        self.observer.audio_cue(if played.applied.captured_count > 0 {
            AudioCue::Capture
        } else {
            AudioCue::Move
        });
        self.end_turn();
        Ok(played.hops)
    }

    fn finish_continuation(&mut self, side: Side, mut at: Square) -> DraughtsResult<Vec<Move>> {
        let mut hops = Vec::new();
        loop {
            let continuations = self.generator.generate_continuations(&self.position.board, at);
            let Some(follow) = select_continuation(&continuations).cloned() else {
                break;
            };
            apply_move(&mut self.position.board, &follow)?;
            self.record_hop(side, &follow);
            at = follow.to;
            hops.push(follow);
        }
        self.observer.audio_cue(AudioCue::Capture);
        self.position.side_to_move = side.opposite();
        self.end_turn();
        Ok(hops)
    }

    fn reply_if_automated(&mut self) -> DraughtsResult<()> {
        if self.running && self.config.auto_reply && self.is_automated(self.position.side_to_move) {
            self.play_automated_turn()?;
        }
        Ok(())
    }

    fn load(&mut self, position: Position) {
        self.position = position;
        self.running = true;
        self.winner = None;
        self.turn = 1;
        self.history.clear();
        self.end_turn();
    }

    fn target_move(&self, square: Square) -> Option<Move> {
        self.targets.iter().find(|mv| mv.to == square).cloned()
    }

    fn commit_interactive(&mut self, mv: Move) -> DraughtsResult<Selection> {
        let side = self.position.side_to_move;
        let applied = apply_move(&mut self.position.board, &mv)?;
        self.record_hop(side, &mv);
        self.observer.audio_cue(if applied.captured_count > 0 {
            AudioCue::Capture
        } else {
            AudioCue::Move
        });

        if mv.is_capture() {
            let continuations = self.generator.generate_continuations(&self.position.board, mv.to);
            if !continuations.is_empty() {
                debug!("{side} must continue capturing from {}", mv.to);
                self.pending_continuation = Some(mv.to);
                self.selected = Some(mv.to);
                self.targets = continuations;
                self.render();
                self.report_status();
                return Ok(Selection::Committed {
                    applied,
                    turn_complete: false,
                });
            }
        }

        self.position.side_to_move = side.opposite();
        self.end_turn();

        self.reply_if_automated()?;
        Ok(Selection::Committed {
            applied,
            turn_complete: true,
        })
    }

    fn record_hop(&mut self, side: Side, mv: &Move) {
        info!("turn {} {side} {mv}", self.turn);
        self.history.push(TurnRecord {
            turn: self.turn,
            side,
            notation: mv.to_string(),
            captured: mv.length(),
            committed_at: Utc::now(),
        });
    }

    /// Clear selection state and check whether the side now to move has lost.
    fn end_turn(&mut self) {
        self.selected = None;
        self.targets.clear();
        self.pending_continuation = None;
        if !self.history.is_empty() {
            self.turn += 1;
        }

        let side = self.position.side_to_move;
        if self.position.piece_count(side) == 0 || !has_legal_move(&self.position.board, side) {
            self.running = false;
            self.winner = Some(side.opposite());
            info!("{} wins, {side} has no legal move", side.opposite());
            self.observer.audio_cue(AudioCue::Win);
        }

        self.render();
        self.report_status();
    }

    fn render(&mut self) {
        let targets = self.legal_targets();
        self.observer.render(&self.position.board, &targets);
    }

    fn report_status(&mut self) {
        let status = self.status();
        self.observer.status(&status);
    }
}

fn engine_for(mode: PlayMode) -> Option<Box<dyn Engine>> {
    match mode {
        PlayMode::PlayerVsPlayer => None,
        PlayMode::VsComputer(difficulty) => Some(build_engine(difficulty)),
    }
}
