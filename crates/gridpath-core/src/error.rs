//! Error types for grid map construction.

use std::fmt;

/// Errors arising from building a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Attempted to build a map with zero (or negative) cells.
    EmptyMap {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// `width * height` exceeds [`GridMap::MAX_CELLS`](crate::GridMap::MAX_CELLS).
    TooLarge {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A cell table does not hold exactly `width * height` entries.
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied table.
        actual: usize,
    },
    /// A text map row differs in length from the first row.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// A text map contains a character that is neither `#` nor `.`.
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap { width, height } => {
                write!(f, "map must have at least one cell, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "a {width}x{height} map exceeds the cell limit")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has width {actual}, expected {expected}"),
            Self::UnknownGlyph { glyph, x, y } => {
                write!(f, "unknown map glyph {glyph:?} at ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for MapError {}
