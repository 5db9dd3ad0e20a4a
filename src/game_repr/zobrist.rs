use std::sync::LazyLock;

use super::bitboards::squares;
use super::piece::{PieceKind, Side};

/// Zobrist hashing keys for pawns-vs-queen positions
///
/// One random 64-bit number per (piece kind, square) plus one for the queen
/// being on move. A position's fingerprint is the XOR of the keys of every
/// feature present, so a move updates it with a handful of XORs.
pub struct ZobristKeys {
    /// [kind][square] - 0 = pawn, 1 = queen
    pub pieces: [[u64; 64]; 2],
    /// Toggled in when the queen is to move
    pub side_to_move: u64,
}

impl ZobristKeys {
    /// Generate keys from a fixed seed so fingerprints are reproducible
    /// between runs.
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x1234_5678_90AB_CDEF);

        let mut pieces = [[0u64; 64]; 2];
        for square in 0..64 {
            for kind in &mut pieces {
                kind[square] = rng.gen();
            }
        }

        Self {
            pieces,
            side_to_move: rng.gen(),
        }
    }

    #[inline]
    fn kind_index(kind: PieceKind) -> usize {
        match kind {
            PieceKind::Pawn => 0,
            PieceKind::Queen => 1,
        }
    }

    #[inline]
    pub fn piece(&self, kind: PieceKind, square: u8) -> u64 {
        self.pieces[Self::kind_index(kind)][square as usize]
    }
}

/// Global Zobrist keys - immutable, initialized once on first use
pub static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Fingerprint computed from scratch. Only used when a position is set up;
/// moves keep it up to date incrementally.
pub fn compute_hash(pawns: u64, queen: u64, side: Side) -> u64 {
    let mut hash = 0u64;

    for sq in squares(pawns) {
        hash ^= ZOBRIST.piece(PieceKind::Pawn, sq);
    }
    for sq in squares(queen) {
        hash ^= ZOBRIST.piece(PieceKind::Queen, sq);
    }
    if side == Side::Queen {
        hash ^= ZOBRIST.side_to_move;
    }

    hash
}
