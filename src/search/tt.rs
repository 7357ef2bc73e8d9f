//! Transposition tables for caching search results.
//!
//! Two tables, keyed the same way (direct-mapped by hash) but holding
//! different payloads: the main search caches `(depth, score)`, the kill
//! searcher caches `(depth, Option<Move>)`.
//!
//! # Example
//!
//! ```
//! use gomoku::search::TranspositionTable;
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//! tt.store(0x1234, 5, 100);
//! assert_eq!(tt.probe(0x1234, 5), Some(100));
//! assert_eq!(tt.probe(0x1234, 6), None); // insufficient stored depth
//! ```

use crate::board::Pos;

#[derive(Debug, Clone, Copy)]
struct Entry {
    hash: u64,
    depth: i8,
    score: i32,
}

/// Main-search transposition table: maps a hash to `(depth, score)`.
///
/// Direct-mapped (`hash % size`), unconditional overwrite on store. An
/// entry is usable on probe only when its stored depth is at least the
/// remaining depth of the query; a stale, shallower entry is simply
/// ignored rather than removed.
pub struct TranspositionTable {
    entries: Vec<Option<Entry>>,
    size: usize,
}

impl TranspositionTable {
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<Entry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);
        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash as usize) % self.size
    }

    /// Returns the cached score if an entry exists for `hash` at depth
    /// `>= depth`.
    pub fn probe(&self, hash: u64, depth: i8) -> Option<i32> {
        let entry = self.entries[self.slot(hash)]?;
        if entry.hash == hash && entry.depth >= depth {
            Some(entry.score)
        } else {
            None
        }
    }

    /// Store a result, overwriting whatever previously occupied the slot.
    pub fn store(&mut self, hash: u64, depth: i8, score: i32) {
        let slot = self.slot(hash);
        self.entries[slot] = Some(Entry { hash, depth, score });
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
    }
}

#[derive(Debug, Clone, Copy)]
struct KillEntry {
    hash: u64,
    depth: i8,
    mv: Option<Pos>,
}

/// Kill-search transposition table: maps a hash to `(depth, Option<Move>)`.
///
/// `None` results are cached deliberately (a proven non-win at this depth is
/// still useful information), matching the source's behavior rather than
/// the safer "never cache `None`" alternative.
pub struct KillTable {
    entries: Vec<Option<KillEntry>>,
    size: usize,
}

impl KillTable {
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<KillEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);
        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash as usize) % self.size
    }

    /// Returns `Some(cached_move)` (possibly `Some(None)` for a cached
    /// non-win) if an entry exists at depth `>= depth`; `None` means no
    /// usable cache entry, not "no move".
    pub fn probe(&self, hash: u64, depth: i8) -> Option<Option<Pos>> {
        let entry = self.entries[self.slot(hash)]?;
        if entry.hash == hash && entry.depth >= depth {
            Some(entry.mv)
        } else {
            None
        }
    }

    pub fn store(&mut self, hash: u64, depth: i8, mv: Option<Pos>) {
        let slot = self.slot(hash);
        self.entries[slot] = Some(KillEntry { hash, depth, mv });
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_miss_on_empty_table() {
        let tt = TranspositionTable::new(1);
        assert_eq!(tt.probe(42, 4), None);
    }

    #[test]
    fn store_then_probe_at_same_depth() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 6, -123);
        assert_eq!(tt.probe(42, 6), Some(-123));
        assert_eq!(tt.probe(42, 4), Some(-123));
    }

    #[test]
    fn probe_rejects_insufficient_depth() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 4, 10);
        assert_eq!(tt.probe(42, 6), None);
    }

    #[test]
    fn store_overwrites_unconditionally() {
        let mut tt = TranspositionTable::new(1);
        tt.store(42, 8, 10);
        tt.store(42, 2, 999);
        assert_eq!(tt.probe(42, 2), Some(999));
    }

    #[test]
    fn kill_table_caches_none_results() {
        let mut kt = KillTable::new(1);
        kt.store(7, 4, None);
        assert_eq!(kt.probe(7, 4), Some(None));
        assert_eq!(kt.probe(7, 6), None);
    }

    #[test]
    fn kill_table_caches_a_move() {
        let mut kt = KillTable::new(1);
        kt.store(7, 4, Some(Pos::new(7, 7)));
        assert_eq!(kt.probe(7, 4), Some(Some(Pos::new(7, 7))));
    }
}
