use std::fmt;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The X coordinate of the point
    pub x: f64,
    /// The Y coordinate of the point
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the coordinate selected by `axis`
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Euclidean distance between two points
    ///
    /// Uses `hypot`, so points far apart do not overflow while squaring as
    /// long as the distance itself fits in an `f64`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate axis used as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Anything that sits at a point in the plane
///
/// Lets the sorting and scanning routines work on plain [`Point`]s as well as
/// on entries that carry extra bookkeeping alongside their position.
pub trait Located {
    fn point(&self) -> Point;
}

impl Located for Point {
    fn point(&self) -> Point {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = Point::new(-4.5, 7.25);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn distance_of_far_apart_points_does_not_overflow() {
        let a = Point::new(1e200, 0.0);
        let b = Point::new(-1e200, 0.0);
        assert_eq!(a.distance(&b), 2e200);
    }

    #[test]
    fn coord_selects_axis() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.coord(Axis::X), 1.5);
        assert_eq!(p.coord(Axis::Y), -2.0);
    }

    #[test]
    fn display_uses_plain_float_formatting() {
        assert_eq!(Point::new(2.0, 3.5).to_string(), "(2, 3.5)");
    }
}
