//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! immutable walkability map ([`GridMap`]) shared by the search engine in
//! `gridpath-paths` and the map sources in `gridpath-gen`.

pub mod error;
pub mod geom;
pub mod map;

pub use error::MapError;
pub use geom::{Point, Range, RangeIter};
pub use map::{CellType, GridMap, Walkability};
