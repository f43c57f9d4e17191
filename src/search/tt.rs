//! Transposition cache for solved sub-positions
//!
//! Every node the search finishes is remembered under a packed key of the
//! board, the remaining depth and the side to move. The cache is bounded:
//! once it holds `capacity` entries the next store wipes it completely and
//! the search continues with a cold cache.
//!
//! # Example
//!
//! ```
//! use connect4::{Board, Disc};
//! use connect4::search::{CacheKey, TranspositionCache};
//!
//! let mut cache = TranspositionCache::new(1_000);
//! let key = CacheKey::pack(&Board::new(), 4, true, Disc::Blue, false);
//!
//! cache.store(key, 3, 120);
//! assert_eq!(cache.probe(key), Some((3, 120)));
//! ```

use std::collections::HashMap;

use tracing::trace;

use crate::board::{Board, Disc};

/// Default entry ceiling
pub const DEFAULT_CAPACITY: usize = 2_000_000;

/// Packed position key.
///
/// Layout:
/// ```text
/// bits [0..41]   red occupancy            42 bits
/// bits [42..83]  blue occupancy           42 bits
/// bits [84..91]  remaining depth           8 bits
/// bit  92        maximizing node
/// bit  93        maximizer is Blue
/// bit  94        score attack
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(u128);

impl CacheKey {
    const BLUE_SHIFT: u32 = 42;
    const DEPTH_SHIFT: u32 = 84;
    const MAXIMIZING_BIT: u32 = 92;
    const MAXIMIZER_BIT: u32 = 93;
    const SCORE_ATTACK_BIT: u32 = 94;

    #[inline]
    pub fn pack(
        board: &Board,
        depth: u8,
        maximizing: bool,
        maximizer: Disc,
        score_attack: bool,
    ) -> Self {
        let red = u128::from(board.red.bits());
        let blue = u128::from(board.blue.bits());
        let key = red
            | (blue << Self::BLUE_SHIFT)
            | (u128::from(depth) << Self::DEPTH_SHIFT)
            | (u128::from(maximizing) << Self::MAXIMIZING_BIT)
            | (u128::from(maximizer == Disc::Blue) << Self::MAXIMIZER_BIT)
            | (u128::from(score_attack) << Self::SCORE_ATTACK_BIT);
        Self(key)
    }

    /// Raw packed value
    #[inline]
    pub fn raw(self) -> u128 {
        self.0
    }

    /// Remaining depth stored in the key
    #[inline]
    pub fn depth(self) -> u8 {
        (self.0 >> Self::DEPTH_SHIFT) as u8
    }
}

/// Cached node result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub column: usize,
    pub score: i32,
}

/// Usage counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    /// Times the cache was wiped for reaching capacity
    pub full_clears: u64,
}

impl CacheStats {
    /// Probe hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        let probes = self.hits + self.misses;
        if probes == 0 {
            0.0
        } else {
            self.hits as f64 / probes as f64 * 100.0
        }
    }
}

/// Bounded memo of solved nodes.
#[derive(Debug)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, CacheEntry>,
    capacity: usize,
    stats: CacheStats,
}

impl TranspositionCache {
    /// Create a cache that holds at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            stats: CacheStats::default(),
        }
    }

    /// Look up a node. Returns `(column, score)` on a hit.
    pub fn probe(&mut self, key: CacheKey) -> Option<(usize, i32)> {
        match self.entries.get(&key) {
            Some(entry) => {
                self.stats.hits += 1;
                Some((entry.column, entry.score))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Remember a node result.
    ///
    /// A full cache is cleared instead and this entry is dropped.
    pub fn store(&mut self, key: CacheKey, column: usize, score: i32) {
        if self.entries.len() < self.capacity {
            self.entries.insert(key, CacheEntry { column, score });
            self.stats.stores += 1;
        } else {
            trace!(entries = self.entries.len(), "transposition cache full, clearing");
            self.entries.clear();
            self.stats.full_clears += 1;
        }
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
