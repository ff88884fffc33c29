use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: the exact cost of an unobstructed 8-way route where
/// straight steps cost `straight` and diagonal steps cost `diagonal`.
#[inline]
pub fn octile(a: Point, b: Point, straight: f64, diagonal: f64) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    let rest = dx.max(dy) - diag;
    f64::from(diag) * diagonal + f64::from(rest) * straight
}
