//! Error types for path queries.

use gridpath_core::Point;
use std::fmt;

/// Reasons a [`find_path`](crate::PathFinder::find_path) query yields no path.
///
/// All variants are ordinary, deterministic outcomes: repeating the query on
/// the same map returns the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal lies outside the map.
    OutOfBounds {
        /// The offending coordinate.
        cell: Point,
    },
    /// The start or goal cell is not walkable.
    Blocked {
        /// The offending coordinate.
        cell: Point,
    },
    /// The frontier ran dry before the goal was reached.
    Unreachable,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the map"),
            Self::Blocked { cell } => write!(f, "cell {cell} is blocked"),
            Self::Unreachable => write!(f, "goal is unreachable from start"),
        }
    }
}

impl std::error::Error for PathError {}

/// Settings rejected by [`PathFinder::with_config`](crate::PathFinder::with_config).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A step cost is negative, infinite or NaN.
    InvalidStepCost {
        /// `"straight"` or `"diagonal"`.
        step: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepCost { step, value } => write!(
                f,
                "{step} step cost must be finite and non-negative, got {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
