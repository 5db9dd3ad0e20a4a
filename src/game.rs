use std::time::Duration;

use crate::ai::evaluation::evaluate;
use crate::ai::{Engine, SearchConfig, SearchListener, SearchResult, StopHandle};
use crate::error::NotationError;
use crate::game_repr::{GameResult, Position, Side, NO_SQUARE};

/// Game facade: the real game line plus the engine that analyses it.
///
/// This is the surface an application drives. Squares are plain indices
/// 0..63 (a1 = 0, h8 = 63). Every change to the game line (a move, an undo,
/// a reset or a loaded position) clears the engine's search memory, so
/// analysis never reuses results from another line.
///
/// # Usage
///
/// ```rust
/// use pawn_storm::Game;
///
/// let mut game = Game::new();
/// assert!(game.apply_move(12, 28)); // e2-e4
/// assert!(!game.apply_move(12, 28)); // the pawn has gone
///
/// let result = game.run_search(3, None, 2);
/// assert_eq!(result.depth, 3);
/// assert!(game.undo());
/// ```
///
/// A search can run on a worker thread and be stopped from another one
/// through a [`StopHandle`] taken before the game moves to the worker.
pub struct Game {
    position: Position,
    engine: Engine,
}

/// Snapshot of the board for presentation layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub pawns: Vec<u8>,
    /// `NO_SQUARE` once the queen has been captured
    pub queen: u8,
    pub side_to_move: Side,
    pub result: GameResult,
    pub ply: u16,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            position: Position::new(),
            engine: Engine::new(config),
        }
    }

    pub fn reset(&mut self) {
        self.position.reset();
        self.engine.clear_search_memory();
    }

    /// Play `from -> to` if legal. Returns `false` and changes nothing
    /// otherwise.
    pub fn apply_move(&mut self, from: u8, to: u8) -> bool {
        let Some(mv) = self.position.find_move(from, to) else {
            return false;
        };
        if !self.position.apply(mv) {
            return false;
        }
        self.engine.clear_search_memory();
        true
    }

    pub fn undo(&mut self) -> bool {
        if !self.position.undo() {
            return false;
        }
        self.engine.clear_search_memory();
        true
    }

    pub fn legal_moves(&self) -> Vec<(u8, u8)> {
        self.position.legal_moves().iter().map(|mv| mv.squares()).collect()
    }

    pub fn result(&self) -> GameResult {
        self.position.result()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board_state(&self) -> BoardState {
        BoardState {
            pawns: self.position.pawn_squares().collect(),
            queen: self.position.queen_square().unwrap_or(NO_SQUARE),
            side_to_move: self.position.side_to_move(),
            result: self.position.result(),
            ply: self.position.ply(),
        }
    }

    /// Moves played so far, oldest first, in coordinate notation.
    pub fn move_history(&self) -> Vec<String> {
        self.position.history().iter().map(|undo| undo.mv.to_string()).collect()
    }

    /// Static evaluation of the current position, pawns' point of view.
    pub fn evaluate(&self) -> i32 {
        evaluate(&self.position, 0)
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Replace the game with a position in text form. On error the current
    /// game is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), NotationError> {
        self.position = Position::from_fen(fen)?;
        self.engine.clear_search_memory();
        Ok(())
    }

    pub fn run_search(&mut self, max_depth: u8, time_budget: Option<Duration>, line_count: usize) -> SearchResult {
        self.engine.run_search(&self.position, max_depth, time_budget, line_count)
    }

    /// Search with the engine's configured limits.
    pub fn search(&mut self) -> SearchResult {
        self.engine.search(&self.position)
    }

    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SearchListener + Send + 'static,
    {
        self.engine.set_listener(listener);
    }

    pub fn request_stop(&self) {
        self.engine.request_stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.engine.stop_handle()
    }

    pub fn clear_search_memory(&mut self) {
        self.engine.clear_search_memory();
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
