//! Ordered multiset of paths awaiting expansion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::ordering::FrontierKey;
use crate::path::Path;

/// Heap entry ordered by `(key, seq)` so that the `BinaryHeap` (a max-heap)
/// pops the smallest key first, and the oldest entry among equal keys.
#[derive(Debug)]
struct Entry {
    key: FrontierKey,
    seq: u64,
    path: Path,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first frontier.
///
/// Pops paths in ascending [`FrontierKey`] order. Paths with equal keys come
/// out in insertion order, which is what a stable re-sort of a list after
/// every expansion would give.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path` with its precomputed `key`.
    pub fn push(&mut self, key: FrontierKey, path: Path) {
        self.heap.push(Entry {
            key,
            seq: self.next_seq,
            path,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the best-ordered path.
    pub fn pop(&mut self) -> Option<(FrontierKey, Path)> {
        self.heap.pop().map(|e| (e.key, e.path))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
