use super::bitboards::{popcount, queen_attacks, square_bb, squares, RANK_2, RANK_8};
use super::piece::{GameResult, PieceKind, Side};
use super::zobrist::{compute_hash, ZOBRIST};
use super::Move;
use crate::error::PositionError;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Square index used when the queen is off the board.
pub const NO_SQUARE: u8 = 64;

/// Queen's starting square, d8.
pub const QUEEN_START: u8 = 59;

#[derive(Clone, Debug)]
pub struct Position {
    /// Pawn occupancy
    pub(crate) pawns: u64,
    /// Queen occupancy, zero or one bit
    pub(crate) queen: u64,
    pub(crate) side: Side,
    /// Half-moves applied since the position was set up
    pub(crate) ply: u16,
    /// Incrementally maintained Zobrist fingerprint
    pub(crate) hash: u64,
    pub(crate) history: Vec<UndoInfo>,
}

/// Everything needed to take back one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoInfo {
    pub mv: Move,
    /// Bitboard of the piece removed by a capture, zero otherwise
    pub captured: u64,
    /// Fingerprint before the move
    pub hash: u64,
}

impl Default for Position {
    fn default() -> Self {
        let mut pos = Self {
            pawns: 0,
            queen: 0,
            side: Side::Pawns,
            ply: 0,
            hash: 0,
            history: Vec::new(),
        };
        pos.reset();
        pos
    }
}

impl PartialEq for Position {
    /// Positions compare by board and side, not by how they were reached.
    fn eq(&self, other: &Self) -> bool {
        self.pawns == other.pawns && self.queen == other.queen && self.side == other.side
    }
}

impl Eq for Position {}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Eight pawns on the second rank, the queen on d8, pawns to move.
    pub fn reset(&mut self) {
        self.pawns = RANK_2;
        self.queen = square_bb(QUEEN_START);
        self.side = Side::Pawns;
        self.ply = 0;
        self.history.clear();
        self.hash = compute_hash(self.pawns, self.queen, self.side);
    }

    /// Build an arbitrary position. The fingerprint is recomputed and the
    /// move history starts empty.
    pub fn from_parts(pawns: u64, queen: u64, side: Side) -> Result<Self, PositionError> {
        let mut pos = Self::default();
        pos.set_position(pawns, queen, side)?;
        Ok(pos)
    }

    pub fn set_position(&mut self, pawns: u64, queen: u64, side: Side) -> Result<(), PositionError> {
        if pawns & queen != 0 {
            return Err(PositionError::Overlap { overlap: pawns & queen });
        }
        if popcount(queen) > 1 {
            return Err(PositionError::TooManyQueens { count: popcount(queen) });
        }
        if popcount(pawns) > 8 {
            return Err(PositionError::TooManyPawns { count: popcount(pawns) });
        }

        self.pawns = pawns;
        self.queen = queen;
        self.side = side;
        self.ply = 0;
        self.history.clear();
        self.hash = compute_hash(pawns, queen, side);
        Ok(())
    }

    #[inline]
    pub fn pawns(&self) -> u64 {
        self.pawns
    }

    #[inline]
    pub fn queen(&self) -> u64 {
        self.queen
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.pawns | self.queen
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn history(&self) -> &[UndoInfo] {
        &self.history
    }

    pub fn queen_square(&self) -> Option<u8> {
        if self.queen == 0 {
            None
        } else {
            Some(self.queen.trailing_zeros() as u8)
        }
    }

    pub fn pawn_count(&self) -> u32 {
        popcount(self.pawns)
    }

    pub fn is_pawn_at(&self, square: u8) -> bool {
        self.pawns & square_bb(square) != 0
    }

    pub fn is_queen_at(&self, square: u8) -> bool {
        self.queen & square_bb(square) != 0
    }

    pub fn piece_at(&self, square: u8) -> Option<PieceKind> {
        if self.is_pawn_at(square) {
            Some(PieceKind::Pawn)
        } else if self.is_queen_at(square) {
            Some(PieceKind::Queen)
        } else {
            None
        }
    }

    /// Squares the queen currently attacks (including the pawns it could
    /// take). Empty when the queen has been captured.
    pub fn queen_attack_set(&self) -> u64 {
        match self.queen_square() {
            Some(sq) => queen_attacks(sq as usize, self.occupied()),
            None => 0,
        }
    }

    pub fn is_attacked_by_queen(&self, square: u8) -> bool {
        self.queen_attack_set() & square_bb(square) != 0
    }

    /// Decided on material alone: promotion, queen captured or no pawns.
    /// Stalemate needs move generation and is left to [`Position::result`].
    #[inline]
    pub fn is_decided(&self) -> bool {
        self.pawns & RANK_8 != 0 || self.queen == 0 || self.pawns == 0
    }

    pub fn result(&self) -> GameResult {
        if self.pawns & RANK_8 != 0 {
            return GameResult::PawnsWinPromotion;
        }
        if self.queen == 0 {
            return GameResult::PawnsWinCapture;
        }
        if self.pawns == 0 {
            return GameResult::QueenWins;
        }
        if !self.has_legal_moves() {
            return GameResult::DrawStalemate;
        }
        GameResult::Ongoing
    }

    pub fn is_game_over(&self) -> bool {
        self.result().is_over()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Resolve a `(from, to)` pair into the generated move carrying the
    /// right flag.
    pub fn find_move(&self, from: u8, to: u8) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Apply `mv` if it is legal. Returns `false` without touching the
    /// position otherwise.
    pub fn apply(&mut self, mv: Move) -> bool {
        if !self.is_legal(mv) {
            return false;
        }
        self.make_move(mv);
        true
    }

    /// Apply a move known to be legal (generated for this position).
    pub(crate) fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let mut undo = UndoInfo {
            mv,
            captured: 0,
            hash: self.hash,
        };

        match self.side {
            Side::Pawns => {
                if mv.is_capture() {
                    undo.captured = self.queen;
                    self.hash ^= ZOBRIST.piece(PieceKind::Queen, to);
                    self.queen = 0;
                }
                self.hash ^= ZOBRIST.piece(PieceKind::Pawn, from) ^ ZOBRIST.piece(PieceKind::Pawn, to);
                self.pawns ^= square_bb(from) | square_bb(to);
            }
            Side::Queen => {
                if mv.is_capture() {
                    undo.captured = square_bb(to);
                    self.hash ^= ZOBRIST.piece(PieceKind::Pawn, to);
                    self.pawns &= !square_bb(to);
                }
                self.hash ^= ZOBRIST.piece(PieceKind::Queen, from) ^ ZOBRIST.piece(PieceKind::Queen, to);
                self.queen ^= square_bb(from) | square_bb(to);
            }
        }

        self.hash ^= ZOBRIST.side_to_move;
        self.side = self.side.opposite();
        self.ply += 1;
        self.history.push(undo);
    }

    /// Take back the most recent move. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(undo) = self.history.pop() else {
            return false;
        };
        let from = undo.mv.from();
        let to = undo.mv.to();

        self.side = self.side.opposite();
        self.ply -= 1;
        self.hash ^= ZOBRIST.side_to_move;

        match self.side {
            Side::Pawns => {
                self.pawns ^= square_bb(from) | square_bb(to);
                self.hash ^= ZOBRIST.piece(PieceKind::Pawn, from) ^ ZOBRIST.piece(PieceKind::Pawn, to);
                if undo.mv.is_capture() {
                    self.queen = undo.captured;
                    self.hash ^= ZOBRIST.piece(PieceKind::Queen, to);
                }
            }
            Side::Queen => {
                self.queen ^= square_bb(from) | square_bb(to);
                self.hash ^= ZOBRIST.piece(PieceKind::Queen, from) ^ ZOBRIST.piece(PieceKind::Queen, to);
                if undo.mv.is_capture() {
                    self.pawns |= undo.captured;
                    self.hash ^= ZOBRIST.piece(PieceKind::Pawn, to);
                }
            }
        }

        debug_assert_eq!(self.hash, undo.hash, "fingerprint drifted on undo of {}", undo.mv);
        true
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&self, depth: u8) -> u64 {
        let mut pos = self.clone();
        pos.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft_inner(depth - 1);
            self.undo();
        }
        nodes
    }

    /// Squares holding pawns, lowest first.
    pub fn pawn_squares(&self) -> impl Iterator<Item = u8> {
        squares(self.pawns)
    }
}
