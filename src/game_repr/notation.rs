//! Text forms for squares, moves and positions
//!
//! Squares use algebraic names (`a1`..`h8`), moves use coordinate notation
//! (`e2e4`) and positions a FEN-like string with `P` for pawns and `q` for
//! the queen: `3q4/8/8/8/8/8/PPPPPPPP/8 w`.

use super::bitboards::{file_of, make_square, rank_of, square_bb};
use super::piece::{PieceKind, Side};
use super::position::Position;
use super::Move;
use crate::error::NotationError;

const FILES: &[u8; 8] = b"abcdefgh";
const RANKS: &[u8; 8] = b"12345678";

pub fn square_name(square: u8) -> String {
    let file = FILES[file_of(square) as usize] as char;
    let rank = RANKS[rank_of(square) as usize] as char;
    format!("{file}{rank}")
}

pub fn parse_square(text: &str) -> Result<u8, NotationError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(text.to_string()));
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(text.to_string()));
    }
    Ok(make_square(file - b'a', rank - b'1'))
}

/// Split `e2e4` into its two squares without consulting a position.
pub fn parse_squares(text: &str) -> Result<(u8, u8), NotationError> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(NotationError::InvalidMove(text.to_string()));
    }
    let from = parse_square(&text[..2]).map_err(|_| NotationError::InvalidMove(text.to_string()))?;
    let to = parse_square(&text[2..]).map_err(|_| NotationError::InvalidMove(text.to_string()))?;
    Ok((from, to))
}

/// Resolve coordinate notation into the legal move it names in `pos`.
pub fn parse_move(pos: &Position, text: &str) -> Result<Move, NotationError> {
    let (from, to) = parse_squares(text)?;
    pos.find_move(from, to)
        .ok_or_else(|| NotationError::IllegalMove(text.trim().to_string()))
}

impl Position {
    /// Parse a board and side-to-move field. Move counters after the side
    /// field are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Position, NotationError> {
        let mut parts = fen.split_whitespace();
        let board = parts.next().ok_or_else(|| NotationError::InvalidBoard {
            fen: fen.to_string(),
            reason: "empty string".to_string(),
        })?;

        let invalid = |reason: String| NotationError::InvalidBoard {
            fen: fen.to_string(),
            reason,
        };

        let rows: Vec<&str> = board.split('/').collect();
        if rows.len() != 8 {
            return Err(invalid(format!("expected 8 ranks, found {}", rows.len())));
        }

        let mut pawns = 0u64;
        let mut queen = 0u64;

        // First row is the eighth rank
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in row.chars() {
                if file >= 8 {
                    return Err(invalid(format!("rank {} is too long", rank + 1)));
                }
                match c {
                    '1'..='8' => file += c as u8 - b'0',
                    _ => {
                        let kind = match c {
                            'Q' => Some(PieceKind::Queen),
                            other => PieceKind::from_char(other),
                        };
                        let bb = square_bb(make_square(file, rank));
                        match kind {
                            Some(PieceKind::Pawn) => pawns |= bb,
                            Some(PieceKind::Queen) => queen |= bb,
                            None => return Err(invalid(format!("unexpected piece `{c}`"))),
                        }
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(invalid(format!("rank {} has {} files", rank + 1, file)));
            }
        }

        let side = match parts.next() {
            None | Some("w") => Side::Pawns,
            Some("b") => Side::Queen,
            Some(other) => return Err(NotationError::InvalidSide(other.to_string())),
        };

        Ok(Position::from_parts(pawns, queen, side)?)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.piece_at(make_square(file, rank)) {
                    None => empty_count += 1,
                    Some(kind) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(kind.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push_str(&format!(" {} - - 0 {}", self.side.to_char(), self.ply / 2 + 1));
        fen
    }
}
