//! Bitboard implementation for fast line detection

use super::Pos;

/// One bit per cell, indexed by `row * COLS + col`.
/// The 42 cells fit in the low bits of a single u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Raw bits (only the low 42 are ever set)
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Check that every bit of `mask` is set
    #[inline]
    pub fn contains_all(&self, mask: u64) -> bool {
        self.bits & mask == mask
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

