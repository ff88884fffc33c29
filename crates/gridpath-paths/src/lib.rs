//! A* pathfinding on walkability grids.
//!
//! [`PathFinder`] answers `start → goal` queries over a shared
//! [`GridMap`](gridpath_core::GridMap) with 8-way movement. It owns and
//! reuses its search scratch (per-cell nodes, the open heap and the closed
//! list), so repeated queries on one finder allocate nothing after warm-up.
//!
//! ```
//! use gridpath_core::{GridMap, Point};
//! use gridpath_paths::{PathError, PathFinder};
//!
//! let map = GridMap::parse("
//!     ..#..
//!     ..#..
//!     .....
//! ").unwrap();
//! let mut finder = PathFinder::new(&map);
//! let path = finder.find_path(Point::new(0, 0), Point::new(4, 0)).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(4, 0)));
//! assert_eq!(
//!     finder.find_path(Point::new(2, 0), Point::new(4, 0)),
//!     Err(PathError::Blocked { cell: Point::new(2, 0) }),
//! );
//! ```
//!
//! # Search behaviour
//!
//! - Neighbors are expanded in the order NW, N, NE, W, E, SW, S, SE.
//! - The frontier pops the smallest `f`; ties go to the smaller `h`, then to
//!   the earlier insertion.
//! - By default a cell already on the frontier keeps its first cost and
//!   parent. [`SearchConfig::relax_costs`] enables replacement by cheaper
//!   routes.
//! - The default [`Heuristic::Manhattan`] can overestimate diagonal routes;
//!   [`Heuristic::Octile`] is admissible for the default step costs.

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod node;

pub use astar::{PathFinder, find_path};
pub use config::{DEFAULT_DIAGONAL_COST, DEFAULT_STRAIGHT_COST, Heuristic, SearchConfig};
pub use distance::{chebyshev, manhattan, octile};
pub use error::{ConfigError, PathError};
