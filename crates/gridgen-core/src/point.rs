use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position (or displacement) in board millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered list of points drawn as connected segments.
pub type Polyline = Vec<Point>;

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Same point with both coordinates rounded to 4 decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(round4(self.x), round4(self.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A grid position counted in pitch steps. Offsets relative to a footprint
/// origin and absolute board cells share this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Millimetre position of this cell on a grid whose cell (0,0) sits at `origin`.
    #[must_use]
    pub fn to_mm(self, origin: Point, pitch: f64) -> Point {
        origin.offset(f64::from(self.col) * pitch, f64::from(self.row) * pitch)
    }
}

impl Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.col + rhs.col, self.row + rhs.row)
    }
}

/// Round to 4 decimal places.
#[must_use]
pub fn round4(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    // avoid emitting -0.0
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn grid_pos_maps_to_mm() {
        let p = GridPos::new(2, 3).to_mm(Point::new(10.0, 10.0), 2.54);
        assert_abs_diff_eq!(p.x, 15.08, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 17.62, epsilon = 1e-9);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(0.5, -1.0);
        assert_eq!(a + b, Point::new(1.5, 1.0));
        assert_eq!(a - b, Point::new(0.5, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a.offset(1.0, 1.0), Point::new(2.0, 3.0));
    }

    #[test]
    fn round4_bounds_drift() {
        assert_eq!(round4(0.1 + 0.2), 0.3);
        assert_eq!(round4(1.23456), 1.2346);
        assert_eq!(round4(-0.00001), 0.0);
        assert!(round4(-0.00001).is_sign_positive());
    }
}
