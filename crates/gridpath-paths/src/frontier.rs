//! Open and closed sets.
//!
//! Membership itself lives in the node store tags; the types here keep the
//! ordering (the open heap) and the finalization record (the closed list).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry for a frontier cell, ordered so that `BinaryHeap` pops the
/// smallest `f` first.
///
/// Ties on `f` go to the smaller `h` (the cell believed closer to the goal),
/// then to the earlier insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) h: f64,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cells discovered but not yet finalized.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn insert(&mut self, idx: usize, g: f64, h: f64) {
        self.heap.push(FrontierEntry {
            idx,
            f: g + h,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Remove and return the entry with the smallest `f`.
    pub(crate) fn pop_min_f(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Cells finalized in the current search, in finalization order.
#[derive(Default)]
pub(crate) struct Visited {
    order: Vec<usize>,
}

impl Visited {
    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }

    pub(crate) fn insert(&mut self, idx: usize) {
        self.order.push(idx);
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
