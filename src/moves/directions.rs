//! Diagonal direction tables for men and kings.
//!
//! Iteration order of these tables fixes the order in which moves are
//! generated, which in turn fixes search tie-breaks.

use crate::game_state::draughts_types::Side;

/// A diagonal step as `(d_row, d_col)`.
pub type Direction = (i8, i8);

/// All four diagonals, used by kings.
pub const KING_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The two forward diagonals for a side's men.
#[inline]
pub const fn man_directions(side: Side) -> [Direction; 2] {
    let forward = side.forward();
    [(forward, -1), (forward, 1)]
}
