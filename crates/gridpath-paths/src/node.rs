//! Per-cell search bookkeeping.
//!
//! The store holds one [`SearchNode`] per map cell. Nodes are never cleared
//! between searches; instead each search bumps a generation counter and a
//! node whose generation differs from the current one reads as
//! [`Membership::Unseen`]. Cost fields are only read after the node has been
//! opened in the current generation.

/// Search state of a cell within the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Membership {
    Unseen,
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) parent: Option<usize>,
    generation: u32,
    membership: Membership,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
            generation: 0,
            membership: Membership::Unseen,
        }
    }
}

impl SearchNode {
    /// Set both cost terms; `f` always follows as `g + h`.
    #[inline]
    fn set_costs(&mut self, g: f64, h: f64) {
        self.g = g;
        self.h = h;
        self.f = g + h;
    }
}

pub(crate) struct NodeStore {
    nodes: Vec<SearchNode>,
    generation: u32,
}

impl NodeStore {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); len],
            generation: 0,
        }
    }

    /// Invalidate every node in O(1).
    pub(crate) fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for n in &mut self.nodes {
                n.generation = 0;
            }
            self.generation = 1;
        }
    }

    #[inline]
    pub(crate) fn membership(&self, idx: usize) -> Membership {
        let n = &self.nodes[idx];
        if n.generation == self.generation {
            n.membership
        } else {
            Membership::Unseen
        }
    }

    /// Node fields. Only meaningful when `membership(idx)` is not `Unseen`.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    /// Finalize the start cell: zero costs, no parent, closed.
    pub(crate) fn init_start(&mut self, idx: usize) {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        n.set_costs(0.0, 0.0);
        n.parent = None;
        n.generation = generation;
        n.membership = Membership::Closed;
    }

    /// Record a (possibly improved) route to `idx` and mark it open.
    pub(crate) fn open(&mut self, idx: usize, parent: usize, g: f64, h: f64) {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        n.set_costs(g, h);
        n.parent = Some(parent);
        n.generation = generation;
        n.membership = Membership::Open;
    }

    pub(crate) fn close(&mut self, idx: usize) {
        debug_assert_eq!(self.membership(idx), Membership::Open);
        self.nodes[idx].membership = Membership::Closed;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
