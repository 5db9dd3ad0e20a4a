use crate::game_repr::bitboards::{queen_attacks, squares};
use crate::game_repr::{Move, MoveType};

use super::super::position::Position;
use super::MoveList;

impl Position {
    /// Slides in all eight directions. The first occupied square on a ray
    /// is always a pawn, so it becomes a capture.
    pub fn queen_moves_into(&self, moves: &mut MoveList) {
        let Some(from) = self.queen_square() else {
            return;
        };

        let attacks = queen_attacks(from as usize, self.occupied());
        for to in squares(attacks) {
            let kind = if self.pawns & (1u64 << to) != 0 {
                MoveType::Capture
            } else {
                MoveType::Quiet
            };
            moves.push(Move::new(from, to, kind));
        }
    }
}
