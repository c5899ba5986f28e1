//! `Position` to layout-string generator, the inverse of `layout_parser`.

use crate::game_state::draughts_types::*;

pub fn generate_layout(position: &Position) -> String {
    let side = match position.side_to_move {
        Side::Light => 'l',
        Side::Dark => 'd',
    };
    format!("{} {side}", generate_board_layout(&position.board))
}

/// Board part of a layout, without the side to move.
pub fn generate_board_layout(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..i32::from(BOARD_SIZE) {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for col in 0..i32::from(BOARD_SIZE) {
            match Square::new(row, col).and_then(|sq| board.get(sq)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
    }
    out
}

pub(crate) fn piece_to_char(piece: Piece) -> char {
    match (piece.owner, piece.rank) {
        (Side::Light, Rank::Man) => 'l',
        (Side::Light, Rank::King) => 'L',
        (Side::Dark, Rank::Man) => 'd',
        (Side::Dark, Rank::King) => 'D',
    }
}
