// Move ordering for alpha-beta search
//
// Good ordering is what makes alpha-beta fast: the earlier the best move is
// tried, the more siblings get cut. Priority, highest first:
// 1. Transposition table move
// 2. Captures by victim value (a pawn taking the queen before the queen
//    taking a pawn)
// 3. Pushes onto the eighth rank
// 4. Killer moves for this ply
// 5. History score
// 6. Pawn advancement

use crate::game_repr::{rank_of, MoveList, Move, PieceKind, Position, Side};

/// Deepest ply that keeps killer moves
pub const MAX_PLY: usize = 128;

const TT_MOVE_SCORE: i32 = 1_000_000;
const PROMOTION_SCORE: i32 = 500_000;
const CAPTURE_SCALE: i32 = 1_000;
const KILLER_SCORES: [i32; 2] = [90_000, 80_000];
const HISTORY_CAP: i32 = 50_000;

/// Two quiet moves per ply that recently caused a beta cutoff
pub struct KillerMoves {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    /// Newest killer goes into slot 0, the previous one shifts to slot 1.
    pub fn store(&mut self, ply: u16, mv: Move) {
        let Some(slots) = self.slots.get_mut(ply as usize) else {
            return;
        };
        if slots[0] != Some(mv) {
            slots[1] = slots[0];
            slots[0] = Some(mv);
        }
    }

    /// Which slot holds `mv` at this ply, if any
    pub fn slot_of(&self, ply: u16, mv: Move) -> Option<usize> {
        let slots = self.slots.get(ply as usize)?;
        slots.iter().position(|&k| k == Some(mv))
    }

    pub fn get(&self, ply: u16) -> [Option<Move>; 2] {
        self.slots.get(ply as usize).copied().unwrap_or([None; 2])
    }

    pub fn clear(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self::new()
    }
}

/// Per (from, to) cutoff counter for quiet moves
pub struct HistoryTable {
    scores: Box<[[i32; 64]; 64]>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            scores: Box::new([[0; 64]; 64]),
        }
    }

    pub fn update(&mut self, mv: Move, depth: u8) {
        let depth = depth as i32;
        let entry = &mut self.scores[mv.from() as usize][mv.to() as usize];
        *entry = entry.saturating_add(depth * depth);
    }

    #[inline]
    pub fn score(&self, mv: Move) -> i32 {
        self.scores[mv.from() as usize][mv.to() as usize]
    }

    pub fn clear(&mut self) {
        self.scores.iter_mut().for_each(|row| row.fill(0));
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering score of one move. Higher is searched first.
pub fn score_move(
    pos: &Position,
    mv: Move,
    tt_move: Option<Move>,
    ply: u16,
    killers: &KillerMoves,
    history: &HistoryTable,
) -> i32 {
    if tt_move == Some(mv) {
        return TT_MOVE_SCORE;
    }

    let side = pos.side_to_move();
    let mut score = 0;

    if mv.is_capture() {
        let victim = match side {
            Side::Pawns => PieceKind::Queen,
            Side::Queen => PieceKind::Pawn,
        };
        score += victim.value() * CAPTURE_SCALE;
    }

    if side == Side::Pawns && mv.reaches_last_rank() {
        score += PROMOTION_SCORE;
    }

    if let Some(slot) = killers.slot_of(ply, mv) {
        score += KILLER_SCORES[slot];
    }
    score += history.score(mv).min(HISTORY_CAP);

    if side == Side::Pawns {
        score += rank_of(mv.to()) as i32 * 100;
    }

    score
}

/// Sort `moves` in place, best candidates first. Equal scores keep
/// generation order so the search stays deterministic.
pub fn order_moves(
    pos: &Position,
    moves: &mut MoveList,
    tt_move: Option<Move>,
    ply: u16,
    killers: &KillerMoves,
    history: &HistoryTable,
) {
    moves.sort_by_cached_key(|&mv| -score_move(pos, mv, tt_move, ply, killers, history));
}
