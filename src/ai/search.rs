// Iterative Deepening Search Orchestrator
//
// Searches depth 1, 2, 3, ... up to the configured limit. At every depth
// each root move gets its own full-window search, the root moves are
// ranked, and the best few are expanded into principal variations by
// walking the transposition table. A snapshot is published after every
// completed depth; an interrupted depth is thrown away.

use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use super::move_ordering::{order_moves, HistoryTable, KillerMoves};
use super::negamax::{negamax, SearchContext};
use super::score::{is_mate_score, mate_in, INFINITY};
use super::transposition_table::TranspositionTable;
use crate::game_repr::{Move, Position};

/// Upper bound on the number of ranked lines
pub const MAX_LINES: usize = 10;

/// One ranked root move and its expected continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PvLine {
    pub moves: Vec<Move>,
    /// From the pawns' point of view
    pub score: i32,
    pub depth: u8,
}

/// Snapshot of a search after a completed depth
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub depth: u8,
    pub sel_depth: u16,
    /// Score of the leading line, from the pawns' point of view
    pub score: i32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    /// Best first
    pub lines: Vec<PvLine>,
}

impl SearchResult {
    pub fn best_move(&self) -> Option<Move> {
        self.lines.first().and_then(|line| line.moves.first().copied())
    }

    pub fn is_mate(&self) -> bool {
        is_mate_score(self.score)
    }

    /// Full moves to mate: positive when the pawns mate, negative when the
    /// queen does.
    pub fn mate_in(&self) -> Option<i32> {
        mate_in(self.score)
    }
}

/// Limits of one search
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_depth: u8,
    /// Only enforced once depth 1 has completed
    pub time_budget: Option<Duration>,
    pub line_count: usize,
    /// A mate found at this depth or deeper ends the search
    pub mate_exit_depth: u8,
}

/// Mutable search memory carried between searches
pub struct SearchTables<'a> {
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerMoves,
    pub history: &'a mut HistoryTable,
}

#[derive(Debug, Clone)]
struct RootScore {
    mv: Move,
    /// Side-to-move perspective
    score: i32,
    pv: Vec<Move>,
}

/// Perform iterative deepening search
///
/// `pos` is used as the search board and is restored before returning. A
/// finished game yields the empty default snapshot; the outcome itself is
/// available from [`Position::result`].
/// `on_depth` is called with every completed snapshot.
pub fn iterative_deepening_search(
    pos: &mut Position,
    limits: &SearchLimits,
    tables: SearchTables<'_>,
    stop: &AtomicBool,
    on_depth: &mut dyn FnMut(&SearchResult),
) -> SearchResult {
    let start_time = Instant::now();
    let root_side = pos.side_to_move();

    let result = pos.result();
    if result.is_over() {
        log::debug!("search requested on finished game: {result:?}");
        return SearchResult::default();
    }

    let mut root_moves = pos.legal_moves();
    let line_count = limits.line_count.clamp(1, MAX_LINES);
    let max_depth = limits.max_depth.max(1);

    tables.tt.new_search();
    let mut ctx = SearchContext::new(tables.tt, tables.killers, tables.history, stop);

    let mut completed = SearchResult::default();
    let mut previous_best: Option<Move> = None;
    let mut child_pv = Vec::new();

    for depth in 1..=max_depth {
        ctx.sel_depth = 0;
        order_moves(pos, &mut root_moves, previous_best, 0, ctx.killers, ctx.history);

        let mut scored: Vec<RootScore> = Vec::with_capacity(root_moves.len());
        for &mv in &root_moves {
            if ctx.poll() {
                break;
            }

            pos.make_move(mv);
            let score = -negamax(pos, depth - 1, -INFINITY, INFINITY, 1, &mut ctx, &mut child_pv);
            pos.undo();

            if ctx.stopped {
                break;
            }

            let mut pv = Vec::with_capacity(child_pv.len() + 1);
            pv.push(mv);
            pv.extend_from_slice(&child_pv);
            scored.push(RootScore { mv, score, pv });
        }

        if ctx.stopped {
            log::debug!("depth {depth} interrupted, keeping depth {}", completed.depth);
            break;
        }

        // Stable: ties keep the ordering above
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let lines: Vec<PvLine> = scored
            .iter()
            .take(line_count)
            .map(|root| PvLine {
                moves: build_line(pos, root, depth, ctx.tt),
                score: root.score * root_side.sign(),
                depth,
            })
            .collect();

        let elapsed = start_time.elapsed();
        let time_ms = elapsed.as_millis() as u64;
        completed = SearchResult {
            depth,
            sel_depth: ctx.sel_depth,
            score: lines[0].score,
            nodes: ctx.nodes,
            nps: if time_ms > 0 { ctx.nodes * 1000 / time_ms } else { ctx.nodes },
            time_ms,
            lines,
        };
        previous_best = Some(scored[0].mv);

        print_search_info(&completed);
        on_depth(&completed);

        if completed.is_mate() && depth >= limits.mate_exit_depth {
            log::debug!("forced mate confirmed at depth {depth}");
            break;
        }

        if let Some(budget) = limits.time_budget {
            if depth == 1 {
                ctx.deadline = Some(start_time + budget);
            }
            if is_time_up(&start_time, budget) {
                break;
            }
        }
    }

    completed
}

/// Replay `root.mv` and follow transposition table moves for at most
/// `depth - 1` further plies. The search's own line is used instead when it
/// reaches further. Every move is checked for legality on the way.
fn build_line(pos: &Position, root: &RootScore, depth: u8, tt: &TranspositionTable) -> Vec<Move> {
    let mut board = pos.clone();
    let mut line = vec![root.mv];
    board.make_move(root.mv);

    for _ in 1..depth {
        if board.is_game_over() {
            break;
        }
        let Some(mv) = tt.peek(board.hash()).and_then(|entry| entry.best_move) else {
            break;
        };
        if !board.apply(mv) {
            break;
        }
        line.push(mv);
    }

    if root.pv.len() > line.len() {
        let mut board = pos.clone();
        let replayed: Vec<Move> = root
            .pv
            .iter()
            .copied()
            .take_while(|&mv| board.apply(mv))
            .collect();
        if replayed.len() > line.len() {
            return replayed;
        }
    }

    line
}

/// Check if the time budget has been used up
pub fn is_time_up(start_time: &Instant, budget: Duration) -> bool {
    start_time.elapsed() >= budget
}

fn print_search_info(result: &SearchResult) {
    let score = match result.mate_in() {
        Some(n) => format!("mate {n}"),
        None => format!("cp {}", result.score),
    };
    let pv = result
        .lines
        .first()
        .map(|line| line.moves.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    log::debug!(
        "depth {} seldepth {} score {} nodes {} nps {} time {} pv {}",
        result.depth,
        result.sel_depth,
        score,
        result.nodes,
        result.nps,
        result.time_ms,
        pv
    );
}
