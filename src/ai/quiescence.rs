// Quiescence Search - Tactical Stability Extension
//
// A fixed-depth search that stops right after the queen takes a pawn, or
// right before a pawn promotes, misjudges the position badly. Quiescence
// keeps searching only the forcing moves (captures and pushes onto the
// last two ranks) until the position is quiet, using the static evaluation
// as a "stand-pat" lower bound.

use super::evaluation::static_eval;
use super::move_ordering::order_moves;
use super::negamax::SearchContext;
use super::score::terminal_score;
use crate::game_repr::Position;

/// Maximum depth for quiescence search to prevent runaway extensions
pub const MAX_QSEARCH_DEPTH: u8 = 16;

/// Quiescence search - search until position is quiet
///
/// Fail-hard: the result is clamped to `[alpha, beta]`. Returns the score
/// from the point of view of the side to move, or 0 when the search was
/// stopped.
pub fn quiescence(
    pos: &mut Position,
    mut alpha: i32,
    beta: i32,
    ply: u16,
    qs_depth: u8,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    if ctx.should_stop() {
        return 0;
    }
    ctx.visit(ply);

    let result = pos.result();
    if result.is_over() {
        return terminal_score(result, pos.side_to_move(), ply);
    }

    let stand_pat = static_eval(pos) * pos.side_to_move().sign();
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    if qs_depth >= MAX_QSEARCH_DEPTH {
        return alpha;
    }

    let mut moves = pos.tactical_moves();
    if moves.is_empty() {
        return alpha;
    }
    order_moves(pos, &mut moves, None, ply, ctx.killers, ctx.history);

    for mv in moves {
        pos.make_move(mv);
        let score = -quiescence(pos, -beta, -alpha, ply + 1, qs_depth + 1, ctx);
        pos.undo();

        if ctx.stopped {
            return 0;
        }

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
