/*-------ARCHITECTURE--------*/

// | 4 bits | 6 bits | 6 bits |
// |  Flag  |   To   |  From  |
// |         16 bits          |

use std::fmt;

use super::bitboards::{file_of, rank_of};

/// Kind of move, stored in the top four bits of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Quiet = 0,
    DoublePush = 1,
    Capture = 4,
}

impl From<u16> for MoveType {
    fn from(value: u16) -> Self {
        match value {
            x if x == MoveType::DoublePush as u16 => MoveType::DoublePush,
            x if x == MoveType::Capture as u16 => MoveType::Capture,
            _ => MoveType::Quiet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    buf: u16,
}

impl Move {
    pub fn new(from: u8, to: u8, move_type: MoveType) -> Move {
        debug_assert!(from < 64 && to < 64, "square out of range: {from} -> {to}");
        debug_assert_ne!(from, to, "a move must change squares");

        let mut buf = 0u16;
        buf |= from as u16 & 0x3F;
        buf |= (to as u16 & 0x3F) << 6;
        buf |= (move_type as u16) << 12;

        Self { buf }
    }

    #[inline]
    pub fn from(&self) -> u8 {
        (self.buf & 0x3F) as u8
    }

    #[inline]
    pub fn to(&self) -> u8 {
        ((self.buf >> 6) & 0x3F) as u8
    }

    #[inline]
    pub fn move_type(&self) -> MoveType {
        (self.buf >> 12).into()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.move_type() == MoveType::Capture
    }

    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.move_type() == MoveType::DoublePush
    }

    /// Destination lies on the eighth rank. Only a promotion when a pawn made it.
    #[inline]
    pub fn reaches_last_rank(&self) -> bool {
        self.to() >= 56
    }

    /// Raw 16-bit encoding.
    pub fn raw(&self) -> u16 {
        self.buf
    }

    /// The `(from, to)` pair exposed to callers of the game facade.
    pub fn squares(&self) -> (u8, u8) {
        (self.from(), self.to())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            super::notation::square_name(self.from()),
            super::notation::square_name(self.to())
        )
    }
}

/// Rank and file distance of a move, as `(ranks, files)`.
pub fn move_delta(mv: Move) -> (i8, i8) {
    (
        rank_of(mv.to()) as i8 - rank_of(mv.from()) as i8,
        file_of(mv.to()) as i8 - file_of(mv.from()) as i8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_survive_packing() {
        let mv = Move::new(12, 28, MoveType::DoublePush);
        assert_eq!(mv.from(), 12);
        assert_eq!(mv.to(), 28);
        assert_eq!(mv.move_type(), MoveType::DoublePush);
        assert!(mv.is_double_push());
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_corner_squares() {
        let mv = Move::new(63, 0, MoveType::Capture);
        assert_eq!(mv.from(), 63);
        assert_eq!(mv.to(), 0);
        assert!(mv.is_capture());
    }

    #[test]
    fn test_last_rank_detection() {
        assert!(Move::new(48, 56, MoveType::Quiet).reaches_last_rank());
        assert!(!Move::new(40, 48, MoveType::Quiet).reaches_last_rank());
    }

    #[test]
    fn test_display_uses_coordinates() {
        let mv = Move::new(8, 24, MoveType::DoublePush);
        assert_eq!(mv.to_string(), "a2a4");
    }

    #[test]
    fn test_move_delta() {
        assert_eq!(move_delta(Move::new(9, 18, MoveType::Capture)), (1, 1));
        assert_eq!(move_delta(Move::new(59, 3, MoveType::Quiet)), (-7, 0));
    }
}
