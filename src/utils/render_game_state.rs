//! Terminal-oriented text board renderer.
//!
//! Draws the board with rank 8 (row 0) on top for debugging, tests and the
//! match binary. Optional highlight squares are drawn as `*`.

use crate::game_state::draughts_types::*;
use crate::utils::layout_generator::piece_to_char;

pub fn render_game_state(position: &Position) -> String {
    render_board(&position.board, &[])
}

/// Render `board`, marking empty `highlights` squares.
pub fn render_board(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..i32::from(BOARD_SIZE) {
        let rank = char::from(b'0' + BOARD_SIZE - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..i32::from(BOARD_SIZE) {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let ch = match board.get(square) {
                Some(piece) => piece_to_char(piece),
                None if highlights.contains(&square) => '*',
                None if square.is_playable() => '.',
                None => ' ',
            };
            out.push(ch);
            if col < i32::from(BOARD_SIZE) - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::game_state::draughts_types::{Position, Square};

    #[test]
    fn start_position_renders_both_armies() {
        let text = render_game_state(&Position::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8   d   d   d   d 8");
        assert_eq!(lines[8], "1 l   l   l   l   1");
    }

    #[test]
    fn highlights_mark_empty_targets() {
        let game = Position::new_game();
        let target = Square::new(4, 1).expect("on board");
        let text = render_board(&game.board, &[target]);
        assert_eq!(text.lines().nth(5), Some("4   *   .   .   . 4"));
    }
}
