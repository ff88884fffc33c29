//! Best-first search from a start cell to a goal cell.

use gridpath_core::{GridMap, Point};

use crate::config::SearchConfig;
use crate::error::{ConfigError, PathError};
use crate::frontier::{Frontier, Visited};
use crate::node::{Membership, NodeStore};

/// Neighbor offsets in expansion order: NW, N, NE, W, E, SW, S, SE.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A* path finder over a borrowed [`GridMap`].
///
/// The finder owns its scratch state (node store, frontier, closed list), so
/// repeated queries reuse the same allocations. Queries take `&mut self`: use
/// one finder per thread, all sharing the same `&GridMap`.
///
/// The start cell is finalized immediately rather than placed on the
/// frontier, and the search stops as soon as the goal is finalized.
pub struct PathFinder<'a> {
    map: &'a GridMap,
    config: SearchConfig,
    nodes: NodeStore,
    frontier: Frontier,
    visited: Visited,
}

impl<'a> PathFinder<'a> {
    /// Create a finder with [`SearchConfig::default`].
    pub fn new(map: &'a GridMap) -> Self {
        Self::build(map, SearchConfig::default())
    }

    /// Create a finder with custom settings.
    ///
    /// Fails if a step cost is negative or not finite.
    pub fn with_config(map: &'a GridMap, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(map, config))
    }

    fn build(map: &'a GridMap, config: SearchConfig) -> Self {
        Self {
            map,
            config,
            nodes: NodeStore::new(map.len()),
            frontier: Frontier::default(),
            visited: Visited::default(),
        }
    }

    /// The map being searched.
    #[inline]
    pub fn map(&self) -> &'a GridMap {
        self.map
    }

    /// Current settings.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of cells finalized by the last query, start included. Zero
    /// after a query rejected for its endpoints.
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    /// Cells finalized by the last query, in finalization order.
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.visited.iter().map(|i| self.map.point(i))
    }

    /// Compute a route from `start` to `goal`.
    ///
    /// Returns the cells from `start` to `goal` inclusive, each consecutive
    /// pair being 8-neighbors. Bounds are checked for both endpoints before
    /// walkability, and `start` before `goal`.
    pub fn find_path(&mut self, start: Point, goal: Point) -> Result<Vec<Point>, PathError> {
        self.visited.clear();

        let start_idx = self.map.idx(start).ok_or(PathError::OutOfBounds { cell: start })?;
        let goal_idx = self.map.idx(goal).ok_or(PathError::OutOfBounds { cell: goal })?;
        for cell in [start, goal] {
            if !self.map.is_walkable(cell) {
                return Err(PathError::Blocked { cell });
            }
        }

        self.nodes.reset();
        self.frontier.clear();

        self.nodes.init_start(start_idx);
        self.visited.insert(start_idx);

        if start_idx == goal_idx {
            return Ok(vec![start]);
        }

        let mut current = start_idx;
        loop {
            self.expand(current, goal);

            let Some(next) = self.pop_open() else {
                return Err(PathError::Unreachable);
            };
            self.nodes.close(next);
            self.visited.insert(next);
            current = next;

            if current == goal_idx {
                return Ok(self.reconstruct(goal_idx));
            }
        }
    }

    /// Push the eligible neighbors of `ci` onto the frontier.
    fn expand(&mut self, ci: usize, goal: Point) {
        let cp = self.map.point(ci);
        let current_g = self.nodes.get(ci).g;

        for (dx, dy) in NEIGHBORS {
            let np = cp.shift(dx, dy);
            let Some(ni) = self.map.idx(np) else {
                continue;
            };
            if !self.map.is_walkable_idx(ni) {
                continue;
            }

            let g = current_g + self.config.step_cost(cp, np);
            match self.nodes.membership(ni) {
                Membership::Closed => continue,
                Membership::Open => {
                    if !self.config.relax_costs || g >= self.nodes.get(ni).g {
                        continue;
                    }
                    // h depends only on the cell, keep it.
                    let h = self.nodes.get(ni).h;
                    self.nodes.open(ni, ci, g, h);
                    self.frontier.insert(ni, g, h);
                }
                Membership::Unseen => {
                    let h = self.config.estimate(np, goal);
                    self.nodes.open(ni, ci, g, h);
                    self.frontier.insert(ni, g, h);
                }
            }
        }
    }

    /// Pop the cheapest live frontier entry.
    fn pop_open(&mut self) -> Option<usize> {
        while let Some(entry) = self.frontier.pop_min_f() {
            // Entries superseded by a cheaper route are left in the heap.
            if self.nodes.membership(entry.idx) == Membership::Open
                && self.nodes.get(entry.idx).f == entry.f
            {
                return Some(entry.idx);
            }
        }
        None
    }

    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(goal_idx);
        while let Some(ci) = cur {
            path.push(self.map.point(ci));
            cur = self.nodes.get(ci).parent;
        }
        path.reverse();
        path
    }
}

/// One-shot query with fresh scratch state and default settings.
///
/// Convenient for concurrent callers that share a map but not a finder.
pub fn find_path(map: &GridMap, start: Point, goal: Point) -> Result<Vec<Point>, PathError> {
    PathFinder::new(map).find_path(start, goal)
}
