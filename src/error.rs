//! Error types for position setup and notation parsing
//!
//! Illegal moves and empty-history undos are ordinary `false` returns; these
//! errors only cover text and board layouts handed in from outside.

use thiserror::Error;

/// A board layout that breaks the position invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Pawn and queen bitboards share a square
    #[error("pawn and queen overlap on squares {overlap:#018x}")]
    Overlap { overlap: u64 },

    /// More than one queen bit set
    #[error("at most one queen allowed, found {count}")]
    TooManyQueens { count: u32 },

    /// More than eight pawns
    #[error("at most eight pawns allowed, found {count}")]
    TooManyPawns { count: u32 },
}

/// Failure to read a square, move or position from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid move `{0}`, expected coordinates like `e2e4`")]
    InvalidMove(String),

    #[error("move `{0}` is not legal in this position")]
    IllegalMove(String),

    #[error("invalid board field in `{fen}`: {reason}")]
    InvalidBoard { fen: String, reason: String },

    #[error("invalid side to move `{0}`, expected `w` or `b`")]
    InvalidSide(String),

    #[error(transparent)]
    Position(#[from] PositionError),
}
