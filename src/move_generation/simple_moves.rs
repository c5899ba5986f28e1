use crate::game_state::draughts_types::*;
use crate::moves::directions::{man_directions, KING_DIRECTIONS};
use crate::moves::move_description::Move;

/// Non-capture moves for the piece on `from`.
///
/// Men step one square along a forward diagonal; kings slide any distance
/// along an empty diagonal run, each empty square being its own destination.
pub fn generate_simple_moves(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    if piece.is_king() {
        for (d_row, d_col) in KING_DIRECTIONS {
            let mut distance = 1;
            while let Some(to) = from.offset(d_row, d_col, distance) {
                if !board.is_empty_at(to) {
                    break;
                }
                out.push(Move::simple(from, to));
                distance += 1;
            }
        }
    } else {
        for (d_row, d_col) in man_directions(piece.owner) {
            if let Some(to) = from.offset(d_row, d_col, 1) {
                if board.is_empty_at(to) {
                    out.push(Move::simple(from, to));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_simple_moves;
    use crate::game_state::draughts_types::{Board, Position, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on board")
    }

    #[test]
    fn empty_board_has_no_simple_moves() {
        let board = Board::empty();
        assert!(Square::all().all(|s| generate_simple_moves(&board, s).is_empty()));
    }

    #[test]
    fn men_only_step_forward() {
        let game = Position::from_layout("8/8/8/8/8/2l5/8/8 l").expect("layout should parse");
        let mut targets: Vec<Square> = generate_simple_moves(&game.board, sq(5, 2))
            .into_iter()
            .map(|m| m.to)
            .collect();
        targets.sort();
        assert_eq!(targets, vec![sq(4, 1), sq(4, 3)]);

        let dark = Position::from_layout("8/8/1d6/8/8/8/8/8 d").expect("layout should parse");
        assert!(generate_simple_moves(&dark.board, sq(2, 1))
            .iter()
            .all(|m| m.to.row() == 3));
    }

    #[test]
    fn king_slides_along_every_empty_diagonal() {
        // King on d4 with a blocker on f6.
        let game = Position::from_layout("8/8/5d2/8/3L4/8/8/8 l").expect("layout should parse");
        let moves = generate_simple_moves(&game.board, sq(4, 3));
        // Up-right stops before f6 (1), up-left to a7 (3), down-right to g1 (3), down-left to a1 (3).
        assert_eq!(moves.len(), 1 + 3 + 3 + 3);
        assert!(!moves.iter().any(|m| m.to == sq(2, 5)));
        assert!(moves.iter().all(|m| !m.is_capture()));
    }
}
