// AI - Negamax with Alpha-Beta Pruning
//
// Iterative deepening negamax over the pawns-versus-queen game with:
// - Transposition table keyed by the position fingerprint
// - Quiescence search over captures and pushes near promotion
// - Move ordering by TT move, captures, promotions, killers and history
// - Several ranked lines per search, reported after every depth

pub mod config;
pub mod engine;
pub mod evaluation;
pub mod move_ordering;
pub mod negamax;
pub mod quiescence;
pub mod score;
pub mod search;
pub mod transposition_table;

#[cfg(test)]
mod tests;

pub use config::{Difficulty, SearchConfig};
pub use engine::{ChannelListener, Engine, SearchListener, StopHandle};
pub use evaluation::evaluate;
pub use score::{is_mate_score, mate_in, MATE_SCORE};
pub use search::{PvLine, SearchResult};
pub use transposition_table::TranspositionTable;
