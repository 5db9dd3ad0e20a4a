pub mod tables;
pub use tables::*;

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1; // Clear the LSB
    sq
}

/// Find the index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

/// Find the index of the most significant bit
#[inline]
pub fn bitscan_reverse(bb: u64) -> usize {
    63 - bb.leading_zeros() as usize
}

/// Count the number of set bits in a bitboard
#[inline]
pub fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

#[inline(always)]
pub fn square_bb(square: u8) -> u64 {
    1u64 << square
}

#[inline(always)]
pub fn file_of(square: u8) -> u8 {
    square & 7
}

#[inline(always)]
pub fn rank_of(square: u8) -> u8 {
    square >> 3
}

#[inline(always)]
pub fn make_square(file: u8, rank: u8) -> u8 {
    rank * 8 + file
}

/// Iterator over the set squares of a bitboard, lowest first.
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(pop_lsb(&mut self.0) as u8)
        }
    }
}

#[inline]
pub fn squares(bb: u64) -> Squares {
    Squares(bb)
}

// File and rank masks
pub const FILE_A: u64 = 0x0101010101010101;
pub const FILE_H: u64 = 0x8080808080808080;

pub const RANK_2: u64 = 0x000000000000FF00;
pub const RANK_7: u64 = 0x00FF000000000000;
pub const RANK_8: u64 = 0xFF00000000000000;

// Shift operations with edge handling
#[inline]
pub fn north(bb: u64) -> u64 {
    bb << 8
}

#[inline]
pub fn east(bb: u64) -> u64 {
    (bb << 1) & !FILE_A
}

#[inline]
pub fn west(bb: u64) -> u64 {
    (bb >> 1) & !FILE_H
}
