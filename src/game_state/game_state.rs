//! Board and position value types.
//!
//! `Position` is the state threaded through generation, application and
//! search: a fixed 8x8 board plus the side to move. Both types are `Copy`,
//! so every search hypothesis works on its own snapshot and the live game
//! board is never observed by speculative branches.

use std::fmt;

use crate::game_state::draughts_rules::STARTING_ROWS;
use crate::game_state::draughts_types::*;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::parse_layout;
use crate::errors::DraughtsResult;

/// Mapping from square to optional piece with a fixed 8x8 extent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Squares of `side`'s pieces, in row-major order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.owner == side)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.squares_of(side).count()
    }

    pub fn king_count(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner == side && piece.is_king())
            .count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board({})",
            crate::utils::layout_generator::generate_board_layout(self)
        )
    }
}

/// Board plus side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Side::Light,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard setup: each side's twelve men on the odd-parity squares of its
    /// three nearest rows, Light to move.
    pub fn new_game() -> Self {
        let mut position = Self::new_empty();
        for sq in Square::all().filter(|sq| sq.is_playable()) {
            if sq.row() < STARTING_ROWS {
                position.board.set(sq, Some(Piece::man(Side::Dark)));
            } else if sq.row() >= BOARD_SIZE - STARTING_ROWS {
                position.board.set(sq, Some(Piece::man(Side::Light)));
            }
        }
        position
    }

    #[inline]
    pub fn from_layout(layout: &str) -> DraughtsResult<Self> {
        parse_layout(layout)
    }

    #[inline]
    pub fn layout(&self) -> String {
        generate_layout(self)
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.board.piece_count(side)
    }
}
