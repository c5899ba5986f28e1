//! Core value types for the draughts board.
//!
//! Everything here is `Copy` so positions can be duplicated freely for
//! speculative search branches without sharing state.

use std::fmt;

pub use crate::game_state::game_state::{Board, Position};

pub const BOARD_SIZE: u8 = 8;
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One of the two players.
///
/// Light starts on rows 5..=7 and moves toward row 0; Dark starts on rows
/// 0..=2 and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a forward step for this side's men.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Farthest row from this side's starting edge.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "light"),
            Side::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    #[inline]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }
}

/// Board coordinate, `row` and `col` both in `0..8`.
///
/// Construction goes through [`Square::new`] or [`Square::offset`], so a
/// `Square` value is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Self::new(
                (index / BOARD_SIZE as usize) as i32,
                (index % BOARD_SIZE as usize) as i32,
            )
        } else {
            None
        }
    }

    /// Only odd-parity squares are ever occupied in standard play.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Step `distance` times along `(d_row, d_col)`; `None` once off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, distance: i8) -> Option<Self> {
        Self::new(
            i32::from(self.row) + i32::from(d_row) * i32::from(distance),
            i32::from(self.col) + i32::from(d_col) * i32::from(distance),
        )
    }

    /// Iterate every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'0' + (BOARD_SIZE - self.row));
        write!(f, "{file}{rank}")
    }
}
