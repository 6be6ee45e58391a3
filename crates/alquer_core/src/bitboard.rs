//! Bitboard representation of pawn sets.
//!
//! A bitboard is a 64-bit integer where each bit represents one cell of the
//! board. Cell index = `row * width + col`, so bit 0 is the top-left corner
//! (row 0, column 0). Boards larger than 64 cells are rejected by
//! [`Board::new`](crate::Board::new).

use std::ops::{BitAnd, BitOr};

/// A set of cells on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, idx: u8) -> bool {
        (self.0 & (1u64 << idx)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, idx: u8) {
        self.0 |= 1u64 << idx;
    }

    #[inline(always)]
    pub fn clear(&mut self, idx: u8) {
        self.0 &= !(1u64 << idx);
    }

    /// Copy of `self` with `from` cleared and `to` set.
    #[inline(always)]
    pub const fn moved(self, from: u8, to: u8) -> Self {
        Bitboard((self.0 & !(1u64 << from)) | (1u64 << to))
    }

    /// Number of cells in the set.
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the lowest set cell, or None if empty.
    #[inline(always)]
    pub const fn lsb(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// Remove and return the lowest set cell.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(idx)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

/// Iterator over set cells, lowest index first.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
