//! Canonical draughts rule constants.
//!
//! Starting layout and material weights shared by setup, scoring and tests.

/// Standard Spanish draughts start: twelve men per side on odd-parity squares
/// of the three rows nearest each player, Light to move.
pub const STARTING_POSITION_LAYOUT: &str =
    "1d1d1d1d/d1d1d1d1/1d1d1d1d/8/8/l1l1l1l1/1l1l1l1l/l1l1l1l1 l";

/// Number of rows each side fills at the start.
pub const STARTING_ROWS: u8 = 3;

/// Men per side in the starting position.
pub const MEN_PER_SIDE: usize = 12;

/// Material unit for a man; a king is worth twice as much.
pub const MAN_VALUE: i32 = 100;
pub const KING_VALUE: i32 = 2 * MAN_VALUE;
