//! Engine instance: search memory, configuration, stop flag and listener
//!
//! One `Engine` runs at most one search at a time (`&mut self`). Other
//! threads stop it through a [`StopHandle`]. Tables live as long as the
//! engine and survive between searches until cleared.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{SyncSender, TrySendError};
use std::sync::Arc;
use std::time::Duration;

use super::config::SearchConfig;
use super::move_ordering::{HistoryTable, KillerMoves};
use super::search::{iterative_deepening_search, SearchLimits, SearchResult, SearchTables};
use super::transposition_table::TranspositionTable;
use crate::game_repr::Position;

/// Receives one snapshot per completed depth
pub trait SearchListener {
    fn on_depth(&mut self, result: &SearchResult);
}

impl<F> SearchListener for F
where
    F: FnMut(&SearchResult),
{
    fn on_depth(&mut self, result: &SearchResult) {
        self(result)
    }
}

/// Forwards snapshots into a bounded channel. Snapshots are dropped when
/// the receiver falls behind; the search never blocks on it.
pub struct ChannelListener(pub SyncSender<SearchResult>);

impl SearchListener for ChannelListener {
    fn on_depth(&mut self, result: &SearchResult) {
        match self.0.try_send(result.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => log::trace!("listener channel full, depth {} dropped", result.depth),
            Err(TrySendError::Disconnected(_)) => log::trace!("listener channel closed"),
        }
    }
}

/// Cloneable handle that stops a running search from any thread
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Engine {
    config: SearchConfig,
    tt: TranspositionTable,
    killers: KillerMoves,
    history: HistoryTable,
    stop: Arc<AtomicBool>,
    listener: Option<Box<dyn SearchListener + Send>>,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            tt: TranspositionTable::with_capacity(config.tt_size),
            config,
            killers: KillerMoves::new(),
            history: HistoryTable::new(),
            stop: Arc::new(AtomicBool::new(false)),
            listener: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration. The transposition table is only rebuilt
    /// when its size changes.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.tt_size != self.config.tt_size {
            self.tt = TranspositionTable::with_capacity(config.tt_size);
        }
        self.config = config;
    }

    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SearchListener + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// Stop the running search. Sent while idle, it cancels the next search
    /// instead.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Forget everything learned by previous searches.
    pub fn clear_search_memory(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
        log::trace!("search memory cleared");
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Search with the configured limits.
    pub fn search(&mut self, pos: &Position) -> SearchResult {
        let limits = self.config.limits();
        self.search_with_limits(pos, &limits)
    }

    /// Search with per-call depth, time budget and line count. The mate
    /// exit depth still comes from the configuration.
    pub fn run_search(
        &mut self,
        pos: &Position,
        max_depth: u8,
        time_budget: Option<Duration>,
        line_count: usize,
    ) -> SearchResult {
        let limits = self
            .config
            .clone()
            .with_max_depth(max_depth)
            .with_time_budget(time_budget)
            .with_line_count(line_count)
            .limits();
        self.search_with_limits(pos, &limits)
    }

    fn search_with_limits(&mut self, pos: &Position, limits: &SearchLimits) -> SearchResult {
        let mut board = pos.clone();
        let tables = SearchTables {
            tt: &mut self.tt,
            killers: &mut self.killers,
            history: &mut self.history,
        };
        let listener = &mut self.listener;
        let mut publish = |result: &SearchResult| {
            if let Some(listener) = listener.as_mut() {
                listener.on_depth(result);
            }
        };

        let result = iterative_deepening_search(&mut board, limits, tables, &self.stop, &mut publish);

        // Cleared on exit only: a stop sent before the search began applies to it
        self.stop.store(false, Ordering::Relaxed);
        log::debug!(
            "search finished: depth {} score {} nodes {} in {}ms (tt hit rate {:.2})",
            result.depth,
            result.score,
            result.nodes,
            result.time_ms,
            self.tt.hit_rate()
        );
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
