//! Pawns-versus-queen engine
//!
//! Eight pawns try to promote or take the queen; the queen tries to eat
//! every pawn. [`game_repr`] holds the board, move generation and hashing,
//! [`ai`] the iterative deepening search, and [`Game`] ties both together
//! for applications.

pub mod ai;
pub mod error;
pub mod game;
pub mod game_repr;

pub use ai::{Difficulty, Engine, SearchConfig, SearchListener, SearchResult, StopHandle};
pub use error::{NotationError, PositionError};
pub use game::{BoardState, Game};
pub use game_repr::{GameResult, Move, Position, Side};
