//! Cellular-automata cave maps.
//!
//! Cells start blocked with probability `wall_init_pct`, then each
//! [`CellularAutomataRule`] smooths the mask for a number of repetitions.

use gridpath_core::{CellType, GridMap, MapError, Point};
use rand::{Rng, RngExt};

/// A rule for one iteration of cellular automata smoothing.
#[derive(Debug, Clone)]
pub struct CellularAutomataRule {
    /// If a cell has >= this many blocked neighbors in the 1-ring (8 cells),
    /// it becomes blocked.
    pub w_cutoff1: i32,
    /// If a cell has <= this many blocked neighbors in the 2-ring (24 cells),
    /// it becomes blocked, which fills large open voids.
    pub w_cutoff2: i32,
    /// Whether cells outside the map count as blocked.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CellularAutomataRule {
    fn default() -> Self {
        Self {
            w_cutoff1: 5,
            w_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Cave generator producing a [`GridMap`].
#[derive(Debug, Clone)]
pub struct CaveGen {
    pub wall_init_pct: f64,
    pub rules: Vec<CellularAutomataRule>,
}

impl Default for CaveGen {
    fn default() -> Self {
        Self {
            wall_init_pct: 0.45,
            rules: vec![CellularAutomataRule::default()],
        }
    }
}

impl CaveGen {
    /// Generate a `width × height` cave.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<GridMap, MapError> {
        let len = GridMap::cell_count(width, height)?;
        let init = self.wall_init_pct.clamp(0.0, 1.0);
        let mut mask = Mask {
            width,
            height,
            blocked: (0..len)
                .map(|_| rng.random_bool(init))
                .collect(),
        };

        let mut scratch = vec![false; mask.blocked.len()];
        for rule in &self.rules {
            for _ in 0..rule.reps {
                for (i, next) in scratch.iter_mut().enumerate() {
                    let p = mask.point(i);
                    let walls1 = mask.count_walls_ring(p, 1, rule.walls_out_of_range);
                    let walls2 = mask.count_walls_ring(p, 2, rule.walls_out_of_range);
                    *next = walls1 >= rule.w_cutoff1 || walls2 <= rule.w_cutoff2;
                }
                std::mem::swap(&mut mask.blocked, &mut scratch);
            }
        }

        let cells = mask
            .blocked
            .iter()
            .map(|&b| if b { CellType::Blocked } else { CellType::Walkable })
            .collect();
        let map = GridMap::from_cells(width, height, cells)?;
        log::debug!(
            "cave {}x{}: {} of {} cells open",
            width,
            height,
            map.len() - map.blocked_count(),
            map.len()
        );
        Ok(map)
    }
}

struct Mask {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Mask {
    fn point(&self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    fn at(&self, p: Point) -> Option<bool> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(self.blocked[(p.y * self.width + p.x) as usize])
    }

    /// Count blocked cells within Chebyshev distance `radius` of `center`.
    fn count_walls_ring(&self, center: Point, radius: i32, walls_out_of_range: bool) -> i32 {
        let mut count = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                match self.at(center.shift(dx, dy)) {
                    Some(true) => count += 1,
                    Some(false) => {}
                    None => {
                        if walls_out_of_range {
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }
}
