//! Square and move notation.
//!
//! Squares are a column letter `a`..`h` followed by a rank digit, rank 8
//! being row 0. Simple moves read `c3-d4`; captures list every landing
//! square, `c3xe5xc7`. `Move`'s `Display` produces the same text.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{Square, BOARD_SIZE};
use crate::moves::move_description::Move;

pub fn square_from_notation(text: &str) -> DraughtsResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid(text));
    }
    let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
    if !(b'a'..b'a' + BOARD_SIZE).contains(&file) || !(b'1'..=b'0' + BOARD_SIZE).contains(&rank) {
        return Err(invalid(text));
    }
    let row = i32::from(BOARD_SIZE) - i32::from(rank - b'0');
    let col = i32::from(file - b'a');
    Square::new(row, col).ok_or_else(|| invalid(text))
}

/// Find the move in `legal_moves` written as `text`.
pub fn move_from_notation<'a>(text: &str, legal_moves: &'a [Move]) -> DraughtsResult<&'a Move> {
    let text = text.trim();
    let (is_capture, parts): (bool, Vec<&str>) = if text.contains('x') {
        (true, text.split('x').collect())
    } else {
        (false, text.split('-').collect())
    };
    if parts.len() < 2 || (!is_capture && parts.len() != 2) {
        return Err(invalid(text));
    }

    let squares = parts
        .iter()
        .map(|part| square_from_notation(part))
        .collect::<DraughtsResult<Vec<Square>>>()?;
    let from = squares[0];
    let hops = &squares[1..];

    legal_moves
        .iter()
        .find(|mv| {
            mv.from == from
                && mv.is_capture() == is_capture
                && if is_capture {
                    mv.path == hops
                } else {
                    mv.to == hops[0]
                }
        })
        .ok_or_else(|| DraughtsError::IllegalMove(text.to_owned()))
}

fn invalid(text: &str) -> DraughtsError {
    DraughtsError::InvalidNotation(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{move_from_notation, square_from_notation};
    use crate::errors::DraughtsError;
    use crate::game_state::draughts_types::{Position, Square};
    use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn squares_parse_to_rows_counted_from_the_top() {
        assert_eq!(square_from_notation("a1").expect("parse"), Square::new(7, 0).expect("sq"));
        assert_eq!(square_from_notation("H8").expect("parse"), Square::new(0, 7).expect("sq"));
        assert!(square_from_notation("i1").is_err());
        assert!(square_from_notation("a9").is_err());
        assert!(square_from_notation("a").is_err());
    }

    #[test]
    fn notation_resolves_to_legal_moves() {
        let game = Position::new_game();
        let legal = SpanishMoveGenerator.generate_legal_moves(&game);
        let mv = move_from_notation("c3-d4", &legal).expect("c3-d4 is legal");
        assert_eq!(mv.to_string(), "c3-d4");

        let err = move_from_notation("c3-c4", &legal).expect_err("not legal");
        assert!(matches!(err, DraughtsError::IllegalMove(_)));
    }

    #[test]
    fn capture_notation_matches_full_path() {
        let game = Position::from_layout("8/8/3d4/8/3d4/2l5/8/8 l").expect("layout should parse");
        let legal = SpanishMoveGenerator.generate_legal_moves(&game);
        let mv = move_from_notation("c3xe5xc7", &legal).expect("double capture is legal");
        assert_eq!(mv.length(), 2);
        assert!(move_from_notation("c3xe5", &legal).is_err());
    }
}
