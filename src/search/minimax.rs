//! Fixed-depth minimax with optional alpha-beta pruning.
//!
//! Scores are always taken from the root side's perspective: nodes where the
//! root side moves maximize, the others minimize. Every child is a complete
//! turn (forced continuations already played), searched on its own copy of
//! the position. Leaves and nodes without legal moves return the static
//! evaluation.
//!
//! The root returns the first move reaching the strictly greatest score, so
//! move generation order decides ties and repeated searches of the same
//! position return the same move.

use log::{debug, trace};

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::{Position, Side};
use crate::move_generation::legal_move_apply::play_turn;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;
use crate::search::board_scoring::BoardScorer;

/// Larger than any material score, small enough to negate safely.
pub const SCORE_INFINITY: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            alpha_beta: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

struct SearchContext<'a, G: ?Sized, S: ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    perspective: Side,
    alpha_beta: bool,
    nodes: u64,
}

/// Pick the best move for the side to move in `position`.
pub fn search_best_move<G, S>(
    position: &Position,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> DraughtsResult<SearchResult>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    let perspective = position.side_to_move;
    if config.depth == 0 {
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(position, perspective),
            depth: 0,
            nodes: 1,
        });
    }

    let mut ctx = SearchContext {
        generator,
        scorer,
        perspective,
        alpha_beta: config.alpha_beta,
        nodes: 1,
    };

    let moves = generator.generate_legal_moves(position);
    if moves.is_empty() {
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(position, perspective),
            depth: config.depth,
            nodes: ctx.nodes,
        });
    }

    let mut alpha = -SCORE_INFINITY;
    let mut best_score = -SCORE_INFINITY;
    let mut best_move = None;

    for mv in moves {
        let turn = play_turn(generator, position, &mv)?;
        let score = minimax(&mut ctx, &turn.position, config.depth - 1, alpha, SCORE_INFINITY)?;
        trace!("root move {mv} scored {score}");

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if ctx.alpha_beta && score > alpha {
            alpha = score;
        }
    }

    debug!(
        "search depth {} for {} chose {} score {} nodes {}",
        config.depth,
        perspective,
        best_move
            .as_ref()
            .map_or_else(|| "none".to_owned(), ToString::to_string),
        best_score,
        ctx.nodes
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth: config.depth,
        nodes: ctx.nodes,
    })
}

fn minimax<G, S>(
    ctx: &mut SearchContext<'_, G, S>,
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> DraughtsResult<i32>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    ctx.nodes += 1;

    if depth == 0 {
        return Ok(ctx.scorer.score(position, ctx.perspective));
    }

    let moves = ctx.generator.generate_legal_moves(position);
    if moves.is_empty() {
        return Ok(ctx.scorer.score(position, ctx.perspective));
    }

    let maximizing = position.side_to_move == ctx.perspective;
    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for mv in moves {
        let turn = play_turn(ctx.generator, position, &mv)?;
        let score = minimax(ctx, &turn.position, depth - 1, alpha, beta)?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if ctx.alpha_beta && beta <= alpha {
            break;
        }
    }

    Ok(best)
}
