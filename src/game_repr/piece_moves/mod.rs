pub mod pawn;
pub mod queen;

use smallvec::SmallVec;

use super::bitboards::{RANK_7, RANK_8};
use super::piece::Side;
use super::position::Position;
use super::Move;

/// Move buffer sized so generation never spills to the heap: eight pawns
/// have at most 24 moves, the queen at most 27.
pub type MoveList = SmallVec<[Move; 64]>;

impl Position {
    /// All legal moves for the side to move. A decided game has none.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Generate legal moves into a provided buffer (cleared first).
    pub fn legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        if self.is_decided() {
            return;
        }
        match self.side {
            Side::Pawns => self.pawn_moves_into(moves),
            Side::Queen => self.queen_moves_into(moves),
        }
    }

    /// Cheaper than generating: is there any legal move at all?
    pub fn has_legal_moves(&self) -> bool {
        if self.is_decided() {
            return false;
        }
        match self.side {
            Side::Pawns => self.pawns_can_move(),
            // Every square has a neighbour that is either empty or a pawn.
            Side::Queen => self.queen_attack_set() != 0,
        }
    }

    /// Captures plus pawn pushes onto the seventh or eighth rank. These are
    /// the moves quiescence keeps resolving past the horizon.
    pub fn tactical_moves(&self) -> MoveList {
        let mut moves = self.legal_moves();
        let side = self.side;
        moves.retain(|mv| {
            mv.is_capture()
                || (side == Side::Pawns && (1u64 << mv.to()) & (RANK_7 | RANK_8) != 0)
        });
        moves
    }
}
