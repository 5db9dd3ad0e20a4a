use crate::game_repr::Move;

/// Default number of slots
pub const DEFAULT_TT_SIZE: usize = 1 << 20;

/// Bound kind of a stored score
///
/// - Exact: every move was searched inside the window
/// - LowerBound: a move failed high, the true score is at least this
/// - UpperBound: every move failed low, the true score is at most this
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    LowerBound,
    UpperBound,
}

/// Entry in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionTableEntry {
    /// Full fingerprint, checked on probe
    pub hash: u64,
    /// Score rebased to this node (see `score::score_to_tt`)
    pub score: i32,
    /// Remaining depth the score was searched to
    pub depth: u8,
    pub node_type: NodeType,
    pub best_move: Option<Move>,
    /// Search generation that wrote the entry
    pub generation: u8,
}

/// Fixed-size, directly indexed transposition table
///
/// A slot is `hash % size`; collisions simply overwrite according to the
/// replacement rule. Entries older than the previous search are ignored on
/// probe.
pub struct TranspositionTable {
    slots: Vec<Option<TranspositionTableEntry>>,
    generation: u8,
    /// Statistics: number of successful probes
    pub hits: u64,
    /// Statistics: number of failed probes
    pub misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TT_SIZE)
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            slots: vec![None; size.max(1)],
            generation: 0,
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    /// Start a new search. Entries from this and the previous generation
    /// stay visible.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        log::trace!("transposition table generation {}", self.generation);
    }

    pub fn generation(&self) -> u8 {
        self.generation
    }

    pub fn probe(&mut self, hash: u64) -> Option<TranspositionTableEntry> {
        let found = self.peek(hash);
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Same lookup as [`probe`](Self::probe) without counting it in the
    /// statistics.
    pub fn peek(&self, hash: u64) -> Option<TranspositionTableEntry> {
        self.slots[self.index(hash)].filter(|entry| {
            entry.hash == hash
                && (entry.generation == self.generation || entry.generation == self.generation.wrapping_sub(1))
        })
    }

    /// Replace the slot when it is empty, holds another position, holds a
    /// shallower-or-equal search, or was written by another generation.
    pub fn store(&mut self, hash: u64, score: i32, depth: u8, node_type: NodeType, best_move: Option<Move>) {
        let generation = self.generation;
        let idx = self.index(hash);
        let replace = match &self.slots[idx] {
            None => true,
            Some(existing) => {
                existing.hash != hash || depth >= existing.depth || existing.generation != generation
            }
        };

        if replace {
            self.slots[idx] = Some(TranspositionTableEntry {
                hash,
                score,
                depth,
                node_type,
                best_move,
                generation,
            });
        }
    }

    /// Empty every slot and reset statistics and generation.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.generation = 0;
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn size(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Get hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
