//! Uniform random blocking.

use gridpath_core::{CellType, GridMap, MapError, Point};
use rand::{Rng, RngExt};

/// Blocks each cell independently with probability `blocked_pct`.
///
/// Cells listed with [`keep_clear`](Self::keep_clear) are always walkable,
/// which keeps chosen start and goal cells usable.
#[derive(Debug, Clone)]
pub struct RandomBlocks {
    /// Probability (0.0–1.0) that a cell is blocked.
    pub blocked_pct: f64,
    clear: Vec<Point>,
}

impl Default for RandomBlocks {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl RandomBlocks {
    /// Create a generator blocking cells with probability `blocked_pct`,
    /// clamped to `[0, 1]`.
    pub fn new(blocked_pct: f64) -> Self {
        Self {
            blocked_pct: blocked_pct.clamp(0.0, 1.0),
            clear: Vec::new(),
        }
    }

    /// Force `p` to be walkable in every generated map.
    pub fn keep_clear(mut self, p: Point) -> Self {
        self.clear.push(p);
        self
    }

    /// Generate a `width × height` map.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<GridMap, MapError> {
        let len = GridMap::cell_count(width, height)?;
        let w = width as usize;
        let cells = (0..len)
            .map(|i| {
                let p = Point::new((i % w) as i32, (i / w) as i32);
                // Always draw, so kept-clear cells do not shift the stream.
                let blocked = rng.random_bool(self.blocked_pct);
                if blocked && !self.clear.contains(&p) {
                    CellType::Blocked
                } else {
                    CellType::Walkable
                }
            })
            .collect();
        let map = GridMap::from_cells(width, height, cells)?;
        log::debug!(
            "random {}x{} map at {:.0}%: {} blocked",
            width,
            height,
            self.blocked_pct * 100.0,
            map.blocked_count()
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_map() {
        let blocks = RandomBlocks::default();
        let a = blocks.generate(16, 12, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = blocks.generate(16, 12, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(a.blocked_count() < a.len());
    }

    #[test]
    fn extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let none = RandomBlocks::new(0.0).generate(5, 5, &mut rng).unwrap();
        assert_eq!(none.blocked_count(), 0);
        let all = RandomBlocks::new(3.0).generate(5, 5, &mut rng).unwrap();
        assert_eq!(all.blocked_count(), 25);
    }

    #[test]
    fn kept_clear_cells_are_walkable() {
        let blocks = RandomBlocks::new(1.0)
            .keep_clear(Point::new(0, 0))
            .keep_clear(Point::new(4, 3));
        let map = blocks.generate(5, 4, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(map.blocked_count(), 18);
        assert!(map.is_walkable(Point::new(0, 0)));
        assert!(map.is_walkable(Point::new(4, 3)));
    }

    #[test]
    fn empty_size_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            RandomBlocks::default().generate(0, 3, &mut rng),
            Err(MapError::EmptyMap { .. })
        ));
        assert!(matches!(
            RandomBlocks::default().generate(i32::MAX, 2, &mut rng),
            Err(MapError::TooLarge { .. })
        ));
    }
}
