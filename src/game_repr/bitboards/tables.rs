// Precomputed ray tables for the queen.
//
// RAYS[dir][square] holds every square strictly beyond `square` in direction
// `dir` up to the board edge. Sliding attacks are derived by cutting the ray
// at the first blocker (classical ray approach, no magics needed for one
// slider).

use super::{bitscan_forward, bitscan_reverse};

/// Directions 0..4 walk towards higher square indices, 4..8 towards lower.
pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const NORTH_WEST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const SOUTH_EAST: usize = 7;

/// (rank step, file step) per direction
const DIRECTION_STEPS: [(i8, i8); 8] = [
    (1, 0),   // N
    (1, 1),   // NE
    (0, 1),   // E
    (1, -1),  // NW
    (-1, 0),  // S
    (-1, -1), // SW
    (0, -1),  // W
    (-1, 1),  // SE
];

pub static RAYS: [[u64; 64]; 8] = generate_rays();

/// Squares a pawn on `square` attacks (one rank up, adjacent files).
pub static PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks();

/// Generate ray tables at compile time
const fn generate_rays() -> [[u64; 64]; 8] {
    let mut rays = [[0u64; 64]; 8];
    let mut dir = 0;

    while dir < 8 {
        let (dr, df) = DIRECTION_STEPS[dir];
        let mut sq = 0;

        while sq < 64 {
            let mut rank = (sq / 8) as i8 + dr;
            let mut file = (sq % 8) as i8 + df;
            let mut ray = 0u64;

            while rank >= 0 && rank < 8 && file >= 0 && file < 8 {
                ray |= 1u64 << (rank * 8 + file) as u64;
                rank += dr;
                file += df;
            }

            rays[dir][sq] = ray;
            sq += 1;
        }

        dir += 1;
    }

    rays
}

/// Generate pawn attack table at compile time
const fn generate_pawn_attacks() -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        let mut attack = 0u64;

        if rank < 7 {
            if file > 0 {
                attack |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attack |= 1u64 << (sq + 9);
            }
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

#[inline]
fn positive_ray_attacks(square: usize, occupied: u64, dir: usize) -> u64 {
    let ray = RAYS[dir][square];
    let blockers = ray & occupied;
    if blockers == 0 {
        return ray;
    }
    ray ^ RAYS[dir][bitscan_forward(blockers)]
}

#[inline]
fn negative_ray_attacks(square: usize, occupied: u64, dir: usize) -> u64 {
    let ray = RAYS[dir][square];
    let blockers = ray & occupied;
    if blockers == 0 {
        return ray;
    }
    ray ^ RAYS[dir][bitscan_reverse(blockers)]
}

/// Rank and file attacks, including the first occupied square on each ray.
pub fn rook_attacks(square: usize, occupied: u64) -> u64 {
    positive_ray_attacks(square, occupied, NORTH)
        | positive_ray_attacks(square, occupied, EAST)
        | negative_ray_attacks(square, occupied, SOUTH)
        | negative_ray_attacks(square, occupied, WEST)
}

/// Diagonal attacks, including the first occupied square on each ray.
pub fn bishop_attacks(square: usize, occupied: u64) -> u64 {
    positive_ray_attacks(square, occupied, NORTH_EAST)
        | positive_ray_attacks(square, occupied, NORTH_WEST)
        | negative_ray_attacks(square, occupied, SOUTH_WEST)
        | negative_ray_attacks(square, occupied, SOUTH_EAST)
}

#[inline]
pub fn queen_attacks(square: usize, occupied: u64) -> u64 {
    rook_attacks(square, occupied) | bishop_attacks(square, occupied)
}
