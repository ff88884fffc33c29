//! Immutable walkability maps.
//!
//! A [`GridMap`] records, for every cell of a `width × height` rectangle,
//! whether the cell is [`CellType::Walkable`] or [`CellType::Blocked`]. The
//! walkability itself comes from an external [`Walkability`] source: a map
//! asset, a generator, or any `Fn(Point) -> bool` closure.

use std::fmt;

use crate::error::MapError;
use crate::geom::{Point, Range};

/// Walkability of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Walkable,
    Blocked,
}

impl CellType {
    /// Glyph used by [`GridMap::parse`] and the `Display` impl.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellType::Walkable => '.',
            CellType::Blocked => '#',
        }
    }
}

/// Source of per-cell walkability consulted once per cell at construction.
pub trait Walkability {
    /// Whether the cell at `p` is blocked.
    fn is_blocked(&self, p: Point) -> bool;
}

impl<F> Walkability for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self(p)
    }
}

/// Immutable rectangular grid of walkable / blocked cells.
///
/// Cells are stored row-major; all lookups are O(1). A map is built once and
/// may be shared (`&GridMap`) by any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

impl GridMap {
    /// Largest number of cells a map may hold.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Number of cells in a `width × height` map, or the reason such a map
    /// cannot be built.
    pub fn cell_count(width: i32, height: i32) -> Result<usize, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::EmptyMap { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(MapError::TooLarge { width, height })
    }

    /// Build a map by asking `source` about every cell.
    pub fn new(width: i32, height: i32, source: impl Walkability) -> Result<Self, MapError> {
        Self::cell_count(width, height)?;
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds
            .iter()
            .map(|p| {
                if source.is_blocked(p) {
                    CellType::Blocked
                } else {
                    CellType::Walkable
                }
            })
            .collect();
        let map = Self {
            width,
            height,
            cells,
        };
        log::debug!(
            "built {}x{} grid map ({} blocked)",
            width,
            height,
            map.blocked_count()
        );
        Ok(map)
    }

    /// Build a fully walkable map.
    pub fn open(width: i32, height: i32) -> Result<Self, MapError> {
        Self::new(width, height, |_: Point| false)
    }

    /// Build a map from a row-major cell table of exactly `width * height`
    /// entries.
    pub fn from_cells(width: i32, height: i32, cells: Vec<CellType>) -> Result<Self, MapError> {
        let expected = Self::cell_count(width, height)?;
        if cells.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a text map: one line per row, `#` blocked, `.` walkable.
    ///
    /// Blank lines and surrounding whitespace are ignored, so indented
    /// string literals work as input.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = match glyph {
                    '.' => CellType::Walkable,
                    '#' => CellType::Blocked,
                    _ => return Err(MapError::UnknownGlyph { glyph, x, y }),
                };
                cells.push(cell);
            }
        }
        log::trace!("parsed {}x{} text map", width, rows.len());
        Self::from_cells(width as i32, rows.len() as i32, cells)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty maps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`idx`](Self::idx).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Cell type at `p`, or `None` when out of bounds.
    #[inline]
    pub fn cell_type(&self, p: Point) -> Option<CellType> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell_type(p) == Some(CellType::Walkable)
    }

    /// Whether the cell at row-major index `idx` is walkable.
    #[inline]
    pub fn is_walkable_idx(&self, idx: usize) -> bool {
        self.cells.get(idx) == Some(&CellType::Walkable)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellType::Blocked)
            .count()
    }

    /// Row-major cell table.
    #[inline]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct GridMapRef<'a> {
    width: i32,
    height: i32,
    cells: &'a [CellType],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridMapOwned {
    width: i32,
    height: i32,
    cells: Vec<CellType>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridMapRef {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = GridMapOwned::deserialize(deserializer)?;
        GridMap::from_cells(raw.width, raw.height, raw.cells).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_source_marks_blocked_cells() {
        let map = GridMap::new(4, 3, |p: Point| p.x == 2).unwrap();
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert_eq!(map.len(), 12);
        assert_eq!(map.blocked_count(), 3);
        assert!(!map.is_walkable(Point::new(2, 1)));
        assert!(map.is_walkable(Point::new(1, 1)));
        assert_eq!(map.cell_type(Point::new(2, 0)), Some(CellType::Blocked));
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let map = GridMap::open(3, 3).unwrap();
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(3, 0),
            Point::new(0, 3),
        ] {
            assert!(!map.in_bounds(p));
            assert!(!map.is_walkable(p));
            assert_eq!(map.cell_type(p), None);
            assert_eq!(map.idx(p), None);
        }
    }

    #[test]
    fn idx_point_round_trip() {
        let map = GridMap::open(7, 5).unwrap();
        for p in map.bounds() {
            let i = map.idx(p).unwrap();
            assert_eq!(map.point(i), p);
        }
        assert_eq!(map.idx(Point::new(2, 1)), Some(9));
    }

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(
            GridMap::open(0, 4),
            Err(MapError::EmptyMap {
                width: 0,
                height: 4
            })
        );
        assert!(GridMap::open(3, -1).is_err());
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert_eq!(
            GridMap::open(i32::MAX, i32::MAX),
            Err(MapError::TooLarge {
                width: i32::MAX,
                height: i32::MAX
            })
        );
        assert!(matches!(
            GridMap::from_cells(1 << 15, (1 << 13) + 1, Vec::new()),
            Err(MapError::TooLarge { .. })
        ));
        assert_eq!(GridMap::cell_count(1 << 14, 1 << 14), Ok(GridMap::MAX_CELLS));
        assert_eq!(GridMap::cell_count(7, 5), Ok(35));
    }

    #[test]
    fn from_cells_checks_length() {
        let err = GridMap::from_cells(2, 2, vec![CellType::Walkable; 3]).unwrap_err();
        assert_eq!(
            err,
            MapError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn parse_text_map() {
        let map = GridMap::parse(
            "
            ..#
            .##
            ...
            ",
        )
        .unwrap();
        assert_eq!((map.width(), map.height()), (3, 3));
        assert_eq!(map.blocked_count(), 3);
        assert!(!map.is_walkable(Point::new(1, 1)));
        assert!(map.is_walkable(Point::new(0, 2)));
        assert_eq!(map.to_string(), "..#\n.##\n...\n");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            GridMap::parse("...\n..\n"),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            GridMap::parse("..\n.x\n"),
            Err(MapError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 1
            })
        );
        assert!(matches!(
            GridMap::parse(""),
            Err(MapError::EmptyMap { .. })
        ));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_map_round_trip() {
        let map = GridMap::parse("#..\n.#.\n").unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: GridMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    fn inconsistent_grid_map_rejected() {
        let json = r#"{"width":2,"height":2,"cells":["Walkable"]}"#;
        assert!(serde_json::from_str::<GridMap>(json).is_err());
    }
}
