//! Layout-string to `Position` parser.
//!
//! A layout lists the eight rows from row 0 (Dark's home edge) to row 7,
//! separated by `/`. Digits stand for runs of empty squares, `l`/`L` for a
//! light man/king and `d`/`D` for a dark man/king. A space and `l` or `d`
//! for the side to move follow the board.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::*;

pub fn parse_layout(layout: &str) -> DraughtsResult<Position> {
    let mut parts = layout.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::new_empty();
    parse_board(board_part, &mut position.board)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    Ok(position)
}

fn parse_board(board_part: &str, board: &mut Board) -> DraughtsResult<()> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != usize::from(BOARD_SIZE) {
        return Err(invalid(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=u32::from(BOARD_SIZE)).contains(&empty_count) {
                    return Err(invalid(format!("bad empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or_else(|| invalid(format!("unknown piece character '{ch}'")))?;
            let square = Square::new(row as i32, col as i32)
                .ok_or_else(|| invalid(format!("row {row} has too many columns")))?;
            if !square.is_playable() {
                return Err(invalid(format!("piece on unplayable square {square}")));
            }
            if !piece.is_king() && square.row() == piece.owner.promotion_row() {
                return Err(invalid(format!("uncrowned man on promotion row at {square}")));
            }
            board.set(square, Some(piece));
            col += 1;
        }

        if col != usize::from(BOARD_SIZE) {
            return Err(invalid(format!("row {row} covers {col} columns")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> DraughtsResult<Side> {
    match side_part {
        "l" => Ok(Side::Light),
        "d" => Ok(Side::Dark),
        _ => Err(invalid(format!("bad side to move '{side_part}'"))),
    }
}

pub(crate) fn piece_from_char(ch: char) -> Option<Piece> {
    match ch {
        'l' => Some(Piece::man(Side::Light)),
        'L' => Some(Piece::king(Side::Light)),
        'd' => Some(Piece::man(Side::Dark)),
        'D' => Some(Piece::king(Side::Dark)),
        _ => None,
    }
}

fn invalid(message: impl Into<String>) -> DraughtsError {
    DraughtsError::InvalidLayout(message.into())
}
