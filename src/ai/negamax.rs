// Negamax Search with Alpha-Beta Pruning
//
// Both sides maximise their own score: max(a, b) = -min(-a, -b). Every
// node returns its value from the point of view of the side to move, and
// the caller negates it.
//
// Per node:
// - stop flag or clock expired: unwind with 0
// - finished game: mate or draw score, shifted by ply
// - transposition table probe, which may end the node or narrow the window
// - depth exhausted: quiescence search
// - otherwise search every move in order, keeping the principal variation
//   and recording killers and history on a cutoff

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::move_ordering::{order_moves, HistoryTable, KillerMoves};
use super::quiescence::quiescence;
use super::score::{score_from_tt, score_to_tt, terminal_score, INFINITY};
use super::transposition_table::{NodeType, TranspositionTable};
use crate::game_repr::{Move, Position};

/// Nodes between two reads of the clock
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Mutable state shared by every node of one search
pub struct SearchContext<'a> {
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerMoves,
    pub history: &'a mut HistoryTable,
    stop: &'a AtomicBool,
    /// Wall-clock limit. `None` while unbounded.
    pub deadline: Option<Instant>,
    pub nodes: u64,
    /// Deepest ply visited, quiescence included
    pub sel_depth: u16,
    /// Latched once the stop flag or the deadline fired
    pub stopped: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        tt: &'a mut TranspositionTable,
        killers: &'a mut KillerMoves,
        history: &'a mut HistoryTable,
        stop: &'a AtomicBool,
    ) -> Self {
        Self {
            tt,
            killers,
            history,
            stop,
            deadline: None,
            nodes: 0,
            sel_depth: 0,
            stopped: false,
        }
    }

    /// Called at every node. Reads the stop flag each time and the clock
    /// once per batch of nodes.
    #[inline]
    pub fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
        } else if self.nodes % CLOCK_CHECK_INTERVAL == 0 {
            self.stopped = self.deadline_passed();
        }
        self.stopped
    }

    /// Unconditional check used between root moves.
    pub fn poll(&mut self) -> bool {
        if self.stop.load(Ordering::Relaxed) || self.deadline_passed() {
            self.stopped = true;
        }
        self.stopped
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    #[inline]
    pub(crate) fn visit(&mut self, ply: u16) {
        self.nodes += 1;
        if ply > self.sel_depth {
            self.sel_depth = ply;
        }
    }
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position, restored before returning
/// * `depth` - Remaining depth (0 = hand over to quiescence)
/// * `alpha`, `beta` - Search window
/// * `ply` - Distance from the root, used for mate scores and killers
/// * `ctx` - Tables, counters and stop state of this search
/// * `pv` - Filled with the best line found from this node
///
/// # Returns
///
/// Fail-soft score from the point of view of the side to move. Meaningless
/// when `ctx.stopped` is set on return.
pub fn negamax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u16,
    ctx: &mut SearchContext<'_>,
    pv: &mut Vec<Move>,
) -> i32 {
    pv.clear();

    if ctx.should_stop() {
        return 0;
    }
    ctx.visit(ply);

    let result = pos.result();
    if result.is_over() {
        return terminal_score(result, pos.side_to_move(), ply);
    }

    // Transposition table lookup
    let hash = pos.hash();
    let mut tt_move = None;

    if let Some(entry) = ctx.tt.probe(hash) {
        tt_move = entry.best_move;

        if entry.depth >= depth {
            let tt_score = score_from_tt(entry.score, ply);
            match entry.node_type {
                NodeType::Exact => {
                    if let Some(mv) = entry.best_move {
                        pv.push(mv);
                    }
                    return tt_score;
                }
                NodeType::LowerBound => alpha = alpha.max(tt_score),
                NodeType::UpperBound => beta = beta.min(tt_score),
            }
            if alpha >= beta {
                return tt_score;
            }
        }
    }

    if depth == 0 {
        return quiescence(pos, alpha, beta, ply, 0, ctx);
    }

    let mut moves = pos.legal_moves();
    if moves.is_empty() {
        return 0;
    }
    order_moves(pos, &mut moves, tt_move, ply, ctx.killers, ctx.history);

    let mut best_score = -INFINITY;
    let mut best_move = None;
    let mut node_type = NodeType::UpperBound;
    let mut child_pv = Vec::new();

    for mv in moves {
        pos.make_move(mv);
        let score = -negamax(pos, depth - 1, -beta, -alpha, ply + 1, ctx, &mut child_pv);
        pos.undo();

        if ctx.stopped {
            return 0;
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);

            if score > alpha {
                alpha = score;
                node_type = NodeType::Exact;

                pv.clear();
                pv.push(mv);
                pv.extend_from_slice(&child_pv);

                if score >= beta {
                    node_type = NodeType::LowerBound;

                    if !mv.is_capture() {
                        ctx.killers.store(ply, mv);
                        ctx.history.update(mv, depth);
                    }
                    break;
                }
            }
        }
    }

    ctx.tt.store(hash, score_to_tt(best_score, ply), depth, node_type, best_move);

    best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::score::{is_mate_score, MATE_SCORE};
    use crate::game_repr::Side;

    struct Tables {
        tt: TranspositionTable,
        killers: KillerMoves,
        history: HistoryTable,
        stop: AtomicBool,
    }

    impl Tables {
        fn new() -> Self {
            let mut tt = TranspositionTable::with_capacity(1 << 14);
            tt.new_search();
            Self {
                tt,
                killers: KillerMoves::new(),
                history: HistoryTable::new(),
                stop: AtomicBool::new(false),
            }
        }

        fn ctx(&mut self) -> SearchContext<'_> {
            SearchContext::new(&mut self.tt, &mut self.killers, &mut self.history, &self.stop)
        }
    }

    #[test]
    fn test_promotion_in_one() {
        // Pawn a7, queen h2, pawns to move
        let mut pos = Position::from_parts(1u64 << 48, 1u64 << 15, Side::Pawns).unwrap();
        let mut tables = Tables::new();
        let mut pv = Vec::new();

        let score = negamax(&mut pos, 2, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert_eq!(score, MATE_SCORE - 1);
        assert_eq!(pv.first().map(|m| (m.from(), m.to())), Some((48, 56)));
    }

    #[test]
    fn test_queen_side_sees_loss() {
        // Same layout, queen to move: nothing stops a7-a8
        let mut pos = Position::from_parts(1u64 << 48, 1u64 << 15, Side::Queen).unwrap();
        let mut tables = Tables::new();
        let mut pv = Vec::new();

        let score = negamax(&mut pos, 2, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert!(is_mate_score(score));
        assert_eq!(score, -(MATE_SCORE - 2));
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let mut pos = Position::from_parts(1u64 << 28, 1u64 << 36, Side::Pawns).unwrap();
        let mut tables = Tables::new();
        let mut pv = Vec::new();

        let score = negamax(&mut pos, 3, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert_eq!(score, 0);
        assert!(pv.is_empty());
    }

    #[test]
    fn test_position_restored_after_search() {
        let mut pos = Position::new();
        let before = pos.clone();
        let mut tables = Tables::new();
        let mut pv = Vec::new();

        negamax(&mut pos, 3, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert_eq!(pos, before);
        assert_eq!(pos.hash(), before.hash());
        assert!(pos.history().is_empty());
        assert!(!pv.is_empty());
    }

    #[test]
    fn test_transposition_table_usage() {
        let mut pos = Position::new();
        let mut tables = Tables::new();
        let mut pv = Vec::new();

        let first = negamax(&mut pos, 3, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert!(tables.tt.size() > 0, "TT should have entries after search");

        let hits_before = tables.tt.hits;
        let second = negamax(&mut pos, 3, -INFINITY, INFINITY, 0, &mut tables.ctx(), &mut pv);
        assert!(tables.tt.hits > hits_before, "Second search should hit TT");
        assert_eq!(first, second);
    }

    #[test]
    fn test_stop_flag_unwinds() {
        let mut pos = Position::new();
        let mut tables = Tables::new();
        tables.stop.store(true, Ordering::Relaxed);
        let mut pv = Vec::new();

        let mut ctx = tables.ctx();
        let score = negamax(&mut pos, 6, -INFINITY, INFINITY, 0, &mut ctx, &mut pv);
        assert_eq!(score, 0);
        assert!(ctx.stopped);
        assert_eq!(ctx.nodes, 0);
        assert_eq!(pos, Position::new());
    }
}
