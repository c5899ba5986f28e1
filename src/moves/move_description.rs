//! Move records produced by generation and consumed by application.
//!
//! A capture move describes a whole maximal chain: origin, final landing
//! square, every landing square along the way, and every captured piece in
//! capture order. A simple move has no path and no captures.

use std::fmt;

use crate::game_state::draughts_types::Square;

/// One removed piece along a capture chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapturedPiece {
    pub square: Square,
    pub was_king: bool,
}

/// Captured pieces in capture order.
pub type CaptureRecord = Vec<CapturedPiece>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Landing square of every capture hop; the last entry equals `to`.
    pub path: Vec<Square>,
    pub captures: CaptureRecord,
}

impl Move {
    #[inline]
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            path: Vec::new(),
            captures: Vec::new(),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of pieces captured.
    #[inline]
    pub fn length(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn kings_captured(&self) -> usize {
        self.captures.iter().filter(|c| c.was_king).count()
    }

    /// Selection precedence key: longer chains first, then more kings.
    #[inline]
    pub fn precedence(&self) -> (usize, usize) {
        (self.length(), self.kings_captured())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        if self.is_capture() {
            for hop in &self.path {
                write!(f, "x{hop}")?;
            }
            Ok(())
        } else {
            write!(f, "-{}", self.to)
        }
    }
}
