// Position evaluation function
// Returns score in centipawns from the pawns' point of view
// (positive = good for the pawns, whoever is to move)

use super::score::terminal_score;
use crate::game_repr::{east, file_of, popcount, rank_of, squares, west, PieceKind, Position, Side};

/// Bonus for the side to move
const TEMPO_BONUS: i32 = 10;

/// Per horizontally adjacent friendly pawn
const CONNECTED_PAWN_BONUS: i32 = 5;

/// Pawn with the queen somewhere in front of it on the same file
const BLOCKED_PAWN_PENALTY: i32 = 20;

const QUEEN_CENTRALITY_WEIGHT: i32 = 5;
const QUEEN_RANK_WEIGHT: i32 = 3;
const QUEEN_MOBILITY_WEIGHT: i32 = 2;
const QUEEN_TARGET_WEIGHT: i32 = 10;

/// Full evaluation including finished games, `ply` half-moves from the
/// search root.
pub fn evaluate(pos: &Position, ply: u16) -> i32 {
    let result = pos.result();
    if result.is_over() {
        return terminal_score(result, Side::Pawns, ply);
    }
    static_eval(pos)
}

/// Evaluation of a position known to be ongoing.
pub fn static_eval(pos: &Position) -> i32 {
    let pawns = pos.pawns();
    let side = pos.side_to_move();
    let queen_attacks = pos.queen_attack_set();

    let mut score = pos.pawn_count() as i32 * PieceKind::Pawn.value();
    if pos.queen_square().is_some() {
        score -= PieceKind::Queen.value();
    }

    for sq in squares(pawns) {
        let attacked = queen_attacks & (1u64 << sq) != 0;
        score += pawn_advancement(rank_of(sq), attacked, side);
    }

    if let Some(queen_sq) = pos.queen_square() {
        score -= queen_activity(queen_sq, queen_attacks, pawns);
    }

    score += pawn_structure(pawns, pos.queen_square());
    score += TEMPO_BONUS * side.sign();

    score
}

/// Advancement bonus of one pawn. Doubles with every rank and jumps once
/// the pawn is two steps from promotion. A pawn the queen can take is
/// worth much less when the queen is about to move.
pub(crate) fn pawn_advancement(rank: u8, attacked: bool, side: Side) -> i32 {
    let mut advance = 5i32 << rank.saturating_sub(1);

    let mut promotion = 0;
    if rank >= 5 {
        promotion += (rank as i32 - 4) * 50;
    }
    if rank == 6 {
        promotion += 200;
    }

    if attacked {
        match side {
            Side::Queen => {
                advance /= 4;
                promotion /= 4;
            }
            Side::Pawns => {
                advance = advance * 3 / 4;
                promotion = promotion * 3 / 4;
            }
        }
    }

    advance + promotion
}

/// How well placed the queen is. Subtracted from the pawns' score.
fn queen_activity(queen_sq: u8, attacks: u64, pawns: u64) -> i32 {
    let file = file_of(queen_sq) as i32;
    let rank = rank_of(queen_sq) as i32;

    let centrality = 4 - (file - 3).abs();
    let low_rank = 8 - rank;
    let mobility = popcount(attacks) as i32;
    let targets = popcount(attacks & pawns) as i32;

    centrality * QUEEN_CENTRALITY_WEIGHT
        + low_rank * QUEEN_RANK_WEIGHT
        + mobility * QUEEN_MOBILITY_WEIGHT
        + targets * QUEEN_TARGET_WEIGHT
}

fn pawn_structure(pawns: u64, queen_sq: Option<u8>) -> i32 {
    // Each adjacent pair counts once from either side
    let neighbours = popcount(pawns & east(pawns)) + popcount(pawns & west(pawns));
    let mut score = neighbours as i32 * CONNECTED_PAWN_BONUS;

    if let Some(q) = queen_sq {
        for sq in squares(pawns) {
            if file_of(sq) == file_of(q) && rank_of(q) > rank_of(sq) {
                score -= BLOCKED_PAWN_PENALTY;
            }
        }
    }

    score
}
