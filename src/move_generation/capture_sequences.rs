//! Maximal capture-chain enumeration for a single piece.
//!
//! Chains are built depth-first on scratch copies of the board: each hop
//! removes the captured piece and relocates the capturer before looking for
//! the next hop, so a piece can never be captured twice and a king may fly
//! across the square it started from. Only maximal chains are emitted; a
//! prefix that can still be extended is replaced by its extensions.
//!
//! Men capture along their two forward diagonals by jumping an adjacent
//! opposing piece onto the empty square right behind it. Kings fly: they scan
//! over any number of empty squares to the first occupied square and, when it
//! holds an opposing piece, may land on any empty square beyond it up to the
//! next occupied square or the edge.

use crate::game_state::draughts_types::*;
use crate::moves::directions::{man_directions, Direction, KING_DIRECTIONS};
use crate::moves::move_description::{CaptureRecord, CapturedPiece, Move};

/// A single capture step: the jumped square and the landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureHop {
    pub captured: Square,
    pub landing: Square,
}

/// Every maximal capture chain for the piece on `from`.
///
/// Returns an empty list for an empty square or a piece without captures.
pub fn generate_capture_sequences(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut chain = Chain {
        origin: from,
        path: Vec::new(),
        captures: Vec::new(),
    };
    extend_chain(board, from, piece, &mut chain, &mut out);
    out
}

/// Single-step captures available to `piece` standing on `at`.
pub fn capture_hops(board: &Board, at: Square, piece: Piece) -> Vec<CaptureHop> {
    let mut hops = Vec::new();
    if piece.is_king() {
        for direction in KING_DIRECTIONS {
            king_hops_along(board, at, piece.owner, direction, &mut hops);
        }
    } else {
        for (d_row, d_col) in man_directions(piece.owner) {
            let (Some(captured), Some(landing)) =
                (at.offset(d_row, d_col, 1), at.offset(d_row, d_col, 2))
            else {
                continue;
            };
            if is_opponent(board, captured, piece.owner) && board.is_empty_at(landing) {
                hops.push(CaptureHop { captured, landing });
            }
        }
    }
    hops
}

struct Chain {
    origin: Square,
    path: Vec<Square>,
    captures: CaptureRecord,
}

/// Returns `true` when at least one hop exists from `at`.
fn extend_chain(board: &Board, at: Square, piece: Piece, chain: &mut Chain, out: &mut Vec<Move>) -> bool {
    let hops = capture_hops(board, at, piece);
    for hop in &hops {
        let mut next = *board;
        let Some(captured_piece) = next.take(hop.captured) else {
            continue;
        };
        let mover = next.take(at);
        next.set(hop.landing, mover);

        chain.path.push(hop.landing);
        chain.captures.push(CapturedPiece {
            square: hop.captured,
            was_king: captured_piece.is_king(),
        });

        if !extend_chain(&next, hop.landing, piece, chain, out) {
            out.push(Move {
                from: chain.origin,
                to: hop.landing,
                path: chain.path.clone(),
                captures: chain.captures.clone(),
            });
        }

        chain.path.pop();
        chain.captures.pop();
    }
    !hops.is_empty()
}

fn king_hops_along(board: &Board, at: Square, owner: Side, direction: Direction, hops: &mut Vec<CaptureHop>) {
    let (d_row, d_col) = direction;
    let mut distance = 1;
    let captured = loop {
        match at.offset(d_row, d_col, distance) {
            Some(sq) if board.is_empty_at(sq) => distance += 1,
            Some(sq) => break sq,
            None => return,
        }
    };
    if !is_opponent(board, captured, owner) {
        return;
    }

    let mut beyond = 1;
    while let Some(landing) = captured.offset(d_row, d_col, beyond) {
        if !board.is_empty_at(landing) {
            break;
        }
        hops.push(CaptureHop { captured, landing });
        beyond += 1;
    }
}

#[inline]
fn is_opponent(board: &Board, square: Square, owner: Side) -> bool {
    board.get(square).is_some_and(|p| p.owner != owner)
}
