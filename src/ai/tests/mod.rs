use crate::ai::config::SearchConfig;
use crate::ai::engine::Engine;
use crate::game_repr::{Position, Side};

// ==================== HELPER FUNCTIONS ====================

/// Build a position from square lists
pub fn board(pawn_squares: &[u8], queen_square: Option<u8>, side: Side) -> Position {
    let pawns = pawn_squares.iter().fold(0u64, |bb, &sq| bb | (1u64 << sq));
    let queen = queen_square.map_or(0, |sq| 1u64 << sq);
    Position::from_parts(pawns, queen, side).expect("valid test position")
}

/// Engine with a small table so tests stay light
pub fn test_engine() -> Engine {
    Engine::new(SearchConfig::default().with_tt_size(1 << 16))
}

mod search_tests;
