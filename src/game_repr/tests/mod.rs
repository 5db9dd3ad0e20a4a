use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Build a position from square lists, panicking on an invalid layout
pub fn board(pawn_squares: &[u8], queen_square: Option<u8>, side: Side) -> Position {
    let pawns = pawn_squares.iter().fold(0u64, |bb, &sq| bb | (1u64 << sq));
    let queen = queen_square.map_or(0, |sq| 1u64 << sq);
    Position::from_parts(pawns, queen, side).expect("valid test position")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: u8, to: u8) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type() == move_type).count()
}

// ==================== TEST MODULES ====================

mod notation;
