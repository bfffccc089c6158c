//! Divide-and-conquer closest pair search
//!
//! The points are sorted once by x and once by y. The x-ordering is split in
//! half recursively, the y-ordering is partitioned alongside it without being
//! re-sorted, and each level checks a strip around its dividing line for pairs
//! that straddle it.

pub mod brute;
pub mod sorting;
pub mod strip;

use crate::choices::Execution;
use crate::error::{Error, MalformedInput, Result};
use crate::models::{ClosestPair, ClosestPairResult, SearchStats};
use crate::utils::geometry::{Axis, Located, Point};
use brute::brute_force;
use sorting::sort_by_axis;
use strip::scan_strip;
use tracing::{debug, trace};

/// Fewest points that make up a pair
pub const MIN_POINTS: usize = 2;

/// Ranges of at most this many points are solved by checking every pair
pub const BRUTE_FORCE_LIMIT: usize = 3;

/// Ranges smaller than this are never split across threads
pub const PARALLEL_CUTOFF: usize = 4096;

/// A point tagged with its position in the input
///
/// The tag breaks ties between equal coordinates, so that the x-ordering is
/// exactly the `(x, index)` ordering and the y-ordering can be split the same
/// way the x-ordering is.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    point: Point,
    index: usize,
}

impl Located for Entry {
    fn point(&self) -> Point {
        self.point
    }
}

impl Entry {
    /// Whether this entry sorts at or before `pivot` in the x-ordering
    fn at_or_left_of(&self, pivot: &Entry) -> bool {
        self.point.x < pivot.point.x
            || (self.point.x == pivot.point.x && self.index <= pivot.index)
    }
}

/// A validated set of points held in x- and y-order
#[derive(Debug, Clone)]
pub struct PointSet {
    by_x: Vec<Entry>,
    by_y: Vec<Entry>,
}

impl PointSet {
    /// Validates `points` and sorts them along both axes
    ///
    /// # Errors
    /// - [`Error::InsufficientInput`] when fewer than two points are given
    /// - [`Error::MalformedInput`] when a coordinate is NaN or infinite
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.len() < MIN_POINTS {
            return Err(Error::insufficient_input(points.len()));
        }

        let mut entries = Vec::with_capacity(points.len());
        for (index, &point) in points.iter().enumerate() {
            for axis in [Axis::X, Axis::Y] {
                if !point.coord(axis).is_finite() {
                    return Err(MalformedInput::NonFiniteCoordinate {
                        point: index + 1,
                        axis,
                    }
                    .into());
                }
            }
            entries.push(Entry { point, index });
        }

        Ok(Self {
            by_x: sort_by_axis(&entries, Axis::X),
            by_y: sort_by_axis(&entries, Axis::Y),
        })
    }

    pub fn len(&self) -> usize {
        self.by_x.len()
    }

    /// Always false, a `PointSet` holds at least two points
    pub fn is_empty(&self) -> bool {
        self.by_x.is_empty()
    }

    /// The points in ascending x order
    pub fn sorted_by_x(&self) -> impl Iterator<Item = Point> + '_ {
        self.by_x.iter().map(|entry| entry.point)
    }

    /// The points in ascending y order
    pub fn sorted_by_y(&self) -> impl Iterator<Item = Point> + '_ {
        self.by_y.iter().map(|entry| entry.point)
    }

    /// Finds the closest pair in this set
    ///
    /// # Errors
    /// [`Error::InsufficientInput`] if the search records no pair, which a set
    /// built by [`PointSet::new`] never allows.
    pub fn closest_pair(&self, execution: Execution) -> Result<ClosestPair> {
        let mut best = ClosestPairResult::new();
        let mut stats = SearchStats::default();

        let distance = search(&self.by_x, &self.by_y, &mut best, &mut stats, execution);
        debug!(
            points = self.len(),
            distance,
            base_cases = stats.base_cases,
            strip_scans = stats.strip_scans,
            strip_comparisons = stats.strip_comparisons,
            largest_strip = stats.largest_strip,
            "closest pair search finished"
        );

        best.finish(stats)
            .ok_or_else(|| Error::insufficient_input(self.len()))
    }
}

/// Finds the closest pair among `points` on the current thread
///
/// # Example
/// ```
/// use closest_pair::closest_pair;
/// use closest_pair::utils::geometry::Point;
///
/// let points = [Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(1.0, 0.0)];
/// let answer = closest_pair(&points)?;
/// assert_eq!(answer.distance, 1.0);
/// # Ok::<(), closest_pair::Error>(())
/// ```
pub fn closest_pair(points: &[Point]) -> Result<ClosestPair> {
    closest_pair_with(points, Execution::Sequential)
}

/// Finds the closest pair among `points` using the given execution mode
pub fn closest_pair_with(points: &[Point], execution: Execution) -> Result<ClosestPair> {
    let set = PointSet::new(points)?;
    debug!(points = set.len(), ?execution, "searching for closest pair");
    set.closest_pair(execution)
}

/// Returns the smallest distance between any two entries of `by_x`
///
/// `by_y` must hold the same entries as `by_x`, sorted by y.
fn search(
    by_x: &[Entry],
    by_y: &[Entry],
    best: &mut ClosestPairResult,
    stats: &mut SearchStats,
    execution: Execution,
) -> f64 {
    debug_assert_eq!(by_x.len(), by_y.len());

    if by_x.len() <= BRUTE_FORCE_LIMIT {
        stats.base_cases += 1;
        return brute_force(by_x, best);
    }

    let mid = (by_x.len() - 1) / 2;
    let pivot = by_x[mid];
    let (left_x, right_x) = by_x.split_at(mid + 1);
    let (left_y, right_y): (Vec<Entry>, Vec<Entry>) = by_y
        .iter()
        .copied()
        .partition(|entry| entry.at_or_left_of(&pivot));

    let d = if execution == Execution::Parallel && by_x.len() >= PARALLEL_CUTOFF {
        let (left, right) = rayon::join(
            || search_branch(left_x, &left_y, execution),
            || search_branch(right_x, &right_y, execution),
        );

        for (_, branch_best, branch_stats) in [left, right] {
            best.merge(branch_best);
            stats.absorb(branch_stats);
        }
        left.0.min(right.0)
    } else {
        let left = search(left_x, &left_y, best, stats, execution);
        let right = search(right_x, &right_y, best, stats, execution);
        left.min(right)
    };

    let strip: Vec<Entry> = by_y
        .iter()
        .copied()
        .filter(|entry| (entry.point.x - pivot.point.x).abs() <= d)
        .collect();

    let scan = scan_strip(&strip, d, best);
    stats.record_scan(strip.len(), scan.comparisons);
    trace!(
        points = by_x.len(),
        pivot_x = pivot.point.x,
        d,
        strip = strip.len(),
        comparisons = scan.comparisons,
        "merged halves"
    );

    d.min(scan.distance)
}

/// Runs [`search`] with its own result and counters so it can go to another thread
fn search_branch(
    by_x: &[Entry],
    by_y: &[Entry],
    execution: Execution,
) -> (f64, ClosestPairResult, SearchStats) {
    let mut best = ClosestPairResult::new();
    let mut stats = SearchStats::default();
    let distance = search(by_x, by_y, &mut best, &mut stats, execution);
    (distance, best, stats)
}
