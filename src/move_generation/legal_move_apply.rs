//! Move application, promotion and forced continuation.
//!
//! `apply_move` commits one generated move to a board. It validates the
//! whole move against the board before touching it, so a rejected move
//! leaves the board unchanged. A move that disagrees with the board (origin
//! empty, a listed capture no longer holding an opposing piece, landing
//! square occupied) means generation and application are out of sync and is
//! reported as an invariant violation.
//!
//! `play_turn` plays a complete turn on a copy of a position: the chosen
//! move, then every forced continuation of the same piece, then the side
//! flip.

use log::error;

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;

/// What a committed move did, for audio and display collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub captured_count: usize,
    pub kings_captured: usize,
    pub promoted: bool,
}

impl AppliedMove {
    fn merge(&mut self, rhs: AppliedMove) {
        self.captured_count += rhs.captured_count;
        self.kings_captured += rhs.kings_captured;
        self.promoted |= rhs.promoted;
    }
}

/// Relocate the mover, remove every captured piece and promote on landing.
pub fn apply_move(board: &mut Board, mv: &Move) -> DraughtsResult<AppliedMove> {
    let mut next = *board;

    let mover = next.take(mv.from).ok_or_else(|| {
        invariant_violation(format!("move {mv} starts on empty square {}", mv.from))
    })?;

    let mut applied = AppliedMove::default();
    for captured in &mv.captures {
        match next.take(captured.square) {
            Some(piece) if piece.owner != mover.owner => {
                applied.captured_count += 1;
                if piece.is_king() {
                    applied.kings_captured += 1;
                }
            }
            Some(_) => {
                return Err(invariant_violation(format!(
                    "move {mv} captures own piece on {}",
                    captured.square
                )));
            }
            None => {
                return Err(invariant_violation(format!(
                    "move {mv} captures empty square {}",
                    captured.square
                )));
            }
        }
    }

    if !next.is_empty_at(mv.to) {
        return Err(invariant_violation(format!(
            "move {mv} lands on occupied square {}",
            mv.to
        )));
    }

    let mut landed = mover;
    if !landed.is_king() && mv.to.row() == landed.owner.promotion_row() {
        landed = Piece::king(landed.owner);
        applied.promoted = true;
    }
    next.set(mv.to, Some(landed));

    *board = next;
    Ok(applied)
}

/// Pick the continuation to play among tied-best options: lowest destination
/// in (row, col) order, first generated on equal destinations.
pub fn select_continuation(continuations: &[Move]) -> Option<&Move> {
    continuations
        .iter()
        .enumerate()
        .min_by_key(|(idx, mv)| (mv.to, *idx))
        .map(|(_, mv)| mv)
}

/// A fully played turn.
#[derive(Debug, Clone)]
pub struct PlayedTurn {
    /// Position after the turn, opponent to move.
    pub position: Position,
    /// The chosen move followed by every forced continuation.
    pub hops: Vec<Move>,
    pub applied: AppliedMove,
}

/// Play `mv` and all forced continuations on a copy of `position`.
pub fn play_turn<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    mv: &Move,
) -> DraughtsResult<PlayedTurn> {
    let mover = position.board.get(mv.from).ok_or(DraughtsError::NoPieceAtSquare(mv.from))?;
    if mover.owner != position.side_to_move {
        return Err(DraughtsError::WrongSideToMove {
            square: mv.from,
            owner: mover.owner,
            to_move: position.side_to_move,
        });
    }

    let mut next = *position;
    let mut applied = apply_move(&mut next.board, mv)?;
    let mut hops = vec![mv.clone()];

    if mv.is_capture() {
        let mut at = mv.to;
        loop {
            let continuations = generator.generate_continuations(&next.board, at);
            let Some(follow) = select_continuation(&continuations) else {
                break;
            };
            applied.merge(apply_move(&mut next.board, follow)?);
            at = follow.to;
            hops.push(follow.clone());
        }
    }

    next.side_to_move = position.side_to_move.opposite();
    Ok(PlayedTurn {
        position: next,
        hops,
        applied,
    })
}

/// Generation and application disagree. Debug builds stop here; release
/// builds log and hand the error back with the board untouched.
fn invariant_violation(message: String) -> DraughtsError {
    error!("{message}");
    debug_assert!(false, "engine invariant violated: {message}");
    DraughtsError::InvariantViolation(message)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, play_turn, select_continuation};
    use crate::errors::DraughtsError;
    use crate::game_state::draughts_types::{Piece, Position, Rank, Side, Square};
    use crate::move_generation::legal_move_generator::SpanishMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_description::Move;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on board")
    }

    fn position(layout: &str) -> Position {
        Position::from_layout(layout).expect("test layout should parse")
    }

    #[test]
    fn single_capture_clears_origin_and_captured_square() {
        let mut game = position("8/8/8/8/3d4/2l5/8/8 l");
        let moves = SpanishMoveGenerator.generate_legal_moves(&game);
        assert_eq!(moves.len(), 1);

        let applied = apply_move(&mut game.board, &moves[0]).expect("capture should apply");
        assert_eq!(applied.captured_count, 1);
        assert!(!applied.promoted);
        assert!(game.board.get(sq(5, 2)).is_none());
        assert!(game.board.get(sq(4, 3)).is_none());
        assert_eq!(game.board.get(sq(3, 4)), Some(Piece::man(Side::Light)));
    }

    #[test]
    fn man_reaching_far_row_is_promoted_immediately() {
        let mut game = position("8/2l5/8/8/8/8/8/8 l");
        let mv = Move::simple(sq(1, 2), sq(0, 1));
        let applied = apply_move(&mut game.board, &mv).expect("step should apply");
        assert!(applied.promoted);
        assert_eq!(
            game.board.get(sq(0, 1)).map(|p| p.rank),
            Some(Rank::King)
        );
    }

    #[test]
    fn king_stays_king_when_leaving_promotion_row() {
        let mut game = position("1L6/8/8/8/8/8/8/8 l");
        let mv = Move::simple(sq(0, 1), sq(3, 4));
        let applied = apply_move(&mut game.board, &mv).expect("slide should apply");
        assert!(!applied.promoted);
        assert_eq!(game.board.get(sq(3, 4)), Some(Piece::king(Side::Light)));
    }

    fn stale_capture() -> (Position, Move) {
        let game = position("8/8/8/8/3d4/2l5/8/8 l");
        let mv = SpanishMoveGenerator.generate_legal_moves(&game)[0].clone();
        let mut emptied = game;
        emptied.board.take(sq(4, 3));
        (emptied, mv)
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn stale_capture_is_rejected_without_touching_board() {
        let (mut emptied, mv) = stale_capture();
        let before = emptied;
        let err = apply_move(&mut emptied.board, &mv).expect_err("stale capture must fail");
        assert!(matches!(err, DraughtsError::InvariantViolation(_)));
        assert_eq!(emptied, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "engine invariant violated")]
    fn stale_capture_halts_debug_builds() {
        let (mut emptied, mv) = stale_capture();
        let _ = apply_move(&mut emptied.board, &mv);
    }

    #[test]
    fn play_turn_flips_side_and_rejects_wrong_mover() {
        let game = Position::new_game();
        let mv = SpanishMoveGenerator.generate_legal_moves(&game)[0].clone();
        let turn = play_turn(&SpanishMoveGenerator, &game, &mv).expect("opening move should play");
        assert_eq!(turn.position.side_to_move, Side::Dark);
        assert_eq!(turn.hops.len(), 1);

        let err = play_turn(&SpanishMoveGenerator, &turn.position, &mv)
            .expect_err("light piece cannot move on dark's turn");
        assert!(matches!(
            err,
            DraughtsError::NoPieceAtSquare(_) | DraughtsError::WrongSideToMove { .. }
        ));
    }

    #[test]
    fn promotion_at_end_of_chain_triggers_king_continuation() {
        // Light man b6 jumps c7 and lands on d8, where it is crowned. As a
        // king it must keep capturing: it flies over f6 to g5 or h4.
        let game = position("8/2d5/1l3d2/8/8/8/8/8 l");
        let moves = SpanishMoveGenerator.generate_legal_moves(&game);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(0, 3));

        let turn = play_turn(&SpanishMoveGenerator, &game, &moves[0]).expect("capture should play");
        assert_eq!(turn.hops.len(), 2);
        assert_eq!(turn.applied.captured_count, 2);
        assert!(turn.applied.promoted);
        assert_eq!(turn.position.board.piece_count(Side::Dark), 0);
        // Lowest destination wins the tie between g5 and h4.
        assert_eq!(
            turn.position.board.get(sq(3, 6)),
            Some(Piece::king(Side::Light))
        );
    }

    #[test]
    fn king_continuation_takes_only_the_longest_follow_up() {
        // After crowning on d8 the king can stop on h4 after one capture, or
        // take f6 and then e3 landing on d2 or c1. Only the longer chain counts.
        let game = position("8/2d5/1l3d2/8/8/4d3/8/8 l");
        let moves = SpanishMoveGenerator.generate_legal_moves(&game);
        assert_eq!(moves.len(), 1);

        let mut board = game.board;
        apply_move(&mut board, &moves[0]).expect("capture should apply");
        let continuations = SpanishMoveGenerator.generate_continuations(&board, sq(0, 3));
        assert!(!continuations.is_empty());
        assert!(continuations.iter().all(|mv| mv.length() == 2));
        assert!(continuations.iter().all(|mv| mv.to != sq(4, 7)));

        let turn = play_turn(&SpanishMoveGenerator, &game, &moves[0]).expect("capture should play");
        assert_eq!(turn.hops.len(), 2);
        assert_eq!(turn.applied.captured_count, 3);
        assert_eq!(turn.position.board.piece_count(Side::Dark), 0);
        assert_eq!(
            turn.position.board.get(sq(6, 3)),
            Some(Piece::king(Side::Light))
        );
    }

    #[test]
    fn continuation_tie_break_prefers_lowest_destination() {
        let a = Move::simple(sq(3, 4), sq(5, 6));
        let b = Move::simple(sq(3, 4), sq(1, 2));
        let c = Move::simple(sq(3, 4), sq(1, 2));
        let moves = vec![a, b.clone(), c];
        let picked = select_continuation(&moves).expect("non-empty");
        assert_eq!(picked.to, sq(1, 2));
        assert!(std::ptr::eq(picked, &moves[1]));
        assert!(select_continuation(&[]).is_none());
    }
}
