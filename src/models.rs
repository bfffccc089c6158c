//! Data structures for `closest-pair`

use crate::utils::geometry::Point;

/// The running best answer threaded through a search
///
/// Starts out at an infinite distance with no pair and is only ever lowered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPairResult {
    /// The smallest distance seen so far
    pub distance: f64,
    /// The two points at `distance` from each other, once any pair has been seen
    pub pair: Option<(Point, Point)>,
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of ranges small enough to be solved by brute force
    pub base_cases: usize,
    /// Number of strip scans performed
    pub strip_scans: usize,
    /// Sum of the sizes of every scanned strip
    pub strip_points: usize,
    /// Sum of the pair comparisons made inside strip scans
    pub strip_comparisons: usize,
    /// Size of the largest strip scanned
    pub largest_strip: usize,
}

/// The answer to a closest pair query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// The first point of the pair
    pub first: Point,
    /// The second point of the pair
    pub second: Point,
    /// The Euclidean distance between `first` and `second`
    pub distance: f64,
    /// Counters from the search that produced this answer
    pub stats: SearchStats,
}
