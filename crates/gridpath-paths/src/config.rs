//! Search settings.

use gridpath_core::Point;

use crate::distance;
use crate::error::ConfigError;

/// Cost of a diagonal step unless configured otherwise.
pub const DEFAULT_DIAGONAL_COST: f64 = 1.4;

/// Cost of a horizontal or vertical step unless configured otherwise.
pub const DEFAULT_STRAIGHT_COST: f64 = 1.0;

/// Heuristic used for the `h` estimate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|`. Overestimates diagonal-heavy routes, so results are not
    /// guaranteed shortest.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`.
    Chebyshev,
    /// Exact unobstructed 8-way cost using the configured step costs.
    Octile,
}

/// Tunables for [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Cost of a N/S/E/W step.
    pub straight_cost: f64,
    /// Cost of a diagonal step.
    pub diagonal_cost: f64,
    /// Estimate used for `h`.
    pub heuristic: Heuristic,
    /// When set, a cheaper route to a cell still on the frontier replaces its
    /// parent and cost. Finalized cells are never reopened either way.
    pub relax_costs: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            straight_cost: DEFAULT_STRAIGHT_COST,
            diagonal_cost: DEFAULT_DIAGONAL_COST,
            heuristic: Heuristic::Manhattan,
            relax_costs: false,
        }
    }
}

impl SearchConfig {
    /// Use `heuristic` for `h`.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the straight and diagonal step costs.
    ///
    /// Checked by [`validate`](Self::validate) when the config is handed to a
    /// finder.
    pub fn with_step_costs(mut self, straight: f64, diagonal: f64) -> Self {
        self.straight_cost = straight;
        self.diagonal_cost = diagonal;
        self
    }

    /// Enable or disable cost relaxation of frontier cells.
    pub fn with_relaxation(mut self, relax: bool) -> Self {
        self.relax_costs = relax;
        self
    }

    /// Check that both step costs are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (step, value) in [
            ("straight", self.straight_cost),
            ("diagonal", self.diagonal_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidStepCost { step, value });
            }
        }
        Ok(())
    }

    /// Heuristic estimate from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: Point, to: Point) -> f64 {
        match self.heuristic {
            Heuristic::Manhattan => f64::from(distance::manhattan(from, to)),
            Heuristic::Chebyshev => f64::from(distance::chebyshev(from, to)),
            Heuristic::Octile => {
                distance::octile(from, to, self.straight_cost, self.diagonal_cost)
            }
        }
    }

    /// Cost of a single step between adjacent cells.
    #[inline]
    pub fn step_cost(&self, from: Point, to: Point) -> f64 {
        if from.x != to.x && from.y != to.y {
            self.diagonal_cost
        } else {
            self.straight_cost
        }
    }

    /// Sum of step costs along `path`.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        path.windows(2).map(|w| self.step_cost(w[0], w[1])).sum()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"heuristic":"Octile"}"#).unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Octile);
        assert_eq!(cfg.diagonal_cost, DEFAULT_DIAGONAL_COST);
        assert!(!cfg.relax_costs);
    }
}
