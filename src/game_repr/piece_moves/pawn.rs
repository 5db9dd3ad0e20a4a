use crate::game_repr::bitboards::{north, squares, PAWN_ATTACKS, RANK_2};
use crate::game_repr::{Move, MoveType};

use super::super::position::Position;
use super::MoveList;

impl Position {
    /// Pushes, double pushes from the second rank and diagonal captures of
    /// the queen. Pawns never capture each other.
    pub fn pawn_moves_into(&self, moves: &mut MoveList) {
        let empty = !self.occupied();

        for from in squares(self.pawns) {
            let bb = 1u64 << from;

            let single = north(bb) & empty;
            if single != 0 {
                moves.push(Move::new(from, from + 8, MoveType::Quiet));

                if bb & RANK_2 != 0 && north(single) & empty != 0 {
                    moves.push(Move::new(from, from + 16, MoveType::DoublePush));
                }
            }

            let captures = PAWN_ATTACKS[from as usize] & self.queen;
            for to in squares(captures) {
                moves.push(Move::new(from, to, MoveType::Capture));
            }
        }
    }

    /// Stalemate check without building a list.
    pub(crate) fn pawns_can_move(&self) -> bool {
        let empty = !self.occupied();
        if north(self.pawns) & empty != 0 {
            return true;
        }
        squares(self.pawns).any(|sq| PAWN_ATTACKS[sq as usize] & self.queen != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Side;

    #[test]
    fn test_start_position_has_sixteen_pushes() {
        let pos = Position::new();
        let mut moves = MoveList::new();
        pos.pawn_moves_into(&mut moves);
        assert_eq!(moves.len(), 16);
        assert_eq!(moves.iter().filter(|m| m.is_double_push()).count(), 8);
    }

    #[test]
    fn test_blocked_pawn_cannot_move() {
        // Pawn e4, queen e5
        let pos = Position::from_parts(1u64 << 28, 1u64 << 36, Side::Pawns).unwrap();
        assert!(!pos.pawns_can_move());
    }
}
