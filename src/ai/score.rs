// Score constants and mate-distance arithmetic
//
// Scores are centipawn-like integers. Anything within MATE_BAND of
// MATE_SCORE encodes "mate in N plies": MATE_SCORE - N for the side that
// mates. Mate scores are shifted by ply when they go into the
// transposition table so an entry means the same thing at any depth.

use crate::game_repr::{GameResult, Side};

/// Score of a mate delivered at the root
pub const MATE_SCORE: i32 = 100_000;

/// Width of the band below MATE_SCORE that still counts as a mate
pub const MATE_BAND: i32 = 1_000;

/// Window bound larger than any reachable score
pub const INFINITY: i32 = 1_000_000;

#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() > MATE_SCORE - MATE_BAND
}

/// Full moves until mate. Positive when the score's owner mates, negative
/// when it gets mated, `None` outside the mate band.
pub fn mate_in(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }

    if score > 0 {
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}

/// Re-base a search score (relative to the root) onto the node it belongs
/// to before storing it.
#[inline]
pub fn score_to_tt(score: i32, ply: u16) -> i32 {
    if score > MATE_SCORE - MATE_BAND {
        score + ply as i32
    } else if score < -MATE_SCORE + MATE_BAND {
        score - ply as i32
    } else {
        score
    }
}

/// Inverse of [`score_to_tt`].
#[inline]
pub fn score_from_tt(score: i32, ply: u16) -> i32 {
    if score > MATE_SCORE - MATE_BAND {
        score - ply as i32
    } else if score < -MATE_SCORE + MATE_BAND {
        score + ply as i32
    } else {
        score
    }
}

/// Score of a finished game for `side`, `ply` half-moves from the root.
/// Winning sooner scores higher, losing later scores higher.
pub fn terminal_score(result: GameResult, side: Side, ply: u16) -> i32 {
    match result.winner() {
        Some(winner) if winner == side => MATE_SCORE - ply as i32,
        Some(_) => -(MATE_SCORE - ply as i32),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_in_decoding() {
        assert_eq!(mate_in(MATE_SCORE - 1), Some(1));
        assert_eq!(mate_in(MATE_SCORE - 3), Some(2));
        assert_eq!(mate_in(-(MATE_SCORE - 2)), Some(-1));
        assert_eq!(mate_in(-(MATE_SCORE - 4)), Some(-2));
        assert_eq!(mate_in(350), None);
    }

    #[test]
    fn test_tt_rebasing_round_trips() {
        for &score in &[MATE_SCORE - 5, -(MATE_SCORE - 7), 120, -40, 0] {
            for ply in [0u16, 3, 17] {
                assert_eq!(score_from_tt(score_to_tt(score, ply), ply), score);
            }
        }
        // Ordinary scores are not touched
        assert_eq!(score_to_tt(250, 9), 250);
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(GameResult::PawnsWinPromotion, Side::Queen, 3), -(MATE_SCORE - 3));
        assert_eq!(terminal_score(GameResult::PawnsWinCapture, Side::Pawns, 2), MATE_SCORE - 2);
        assert_eq!(terminal_score(GameResult::QueenWins, Side::Pawns, 4), -(MATE_SCORE - 4));
        assert_eq!(terminal_score(GameResult::DrawStalemate, Side::Pawns, 5), 0);
        // Faster wins are strictly better
        assert!(terminal_score(GameResult::QueenWins, Side::Queen, 1) > terminal_score(GameResult::QueenWins, Side::Queen, 3));
    }
}
