//! Implementations for structs within `models.rs`

use crate::models::{ClosestPair, ClosestPairResult, SearchStats};
use crate::utils::geometry::Point;
use std::fmt;

impl ClosestPairResult {
    /// Creates an empty result at an infinite distance
    pub const fn new() -> Self {
        Self {
            distance: f64::INFINITY,
            pair: None,
        }
    }

    /// Records `a` and `b` as the best pair if `distance` is strictly smaller
    /// than the current best, or if no pair has been recorded yet. Returns
    /// whether the result changed.
    ///
    /// The first pair is always kept so that a set whose distances all
    /// overflow to infinity still reports one.
    pub fn offer(&mut self, a: Point, b: Point, distance: f64) -> bool {
        if distance < self.distance || self.pair.is_none() {
            self.distance = distance;
            self.pair = Some((a, b));
            true
        } else {
            false
        }
    }

    /// Folds another result into this one, keeping the current pair on ties
    pub fn merge(&mut self, other: ClosestPairResult) {
        if let Some((a, b)) = other.pair {
            self.offer(a, b, other.distance);
        }
    }

    /// Turns the running result into a final answer, if any pair was seen
    pub fn finish(self, stats: SearchStats) -> Option<ClosestPair> {
        self.pair.map(|(first, second)| ClosestPair {
            first,
            second,
            distance: self.distance,
            stats,
        })
    }
}

impl Default for ClosestPairResult {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStats {
    /// Records one strip scan over `len` points that made `comparisons` comparisons
    pub fn record_scan(&mut self, len: usize, comparisons: usize) {
        self.strip_scans += 1;
        self.strip_points += len;
        self.strip_comparisons += comparisons;
        self.largest_strip = self.largest_strip.max(len);
    }

    /// Adds the counters of a finished branch
    pub fn absorb(&mut self, other: SearchStats) {
        self.base_cases += other.base_cases;
        self.strip_scans += other.strip_scans;
        self.strip_points += other.strip_points;
        self.strip_comparisons += other.strip_comparisons;
        self.largest_strip = self.largest_strip.max(other.largest_strip);
    }
}

impl fmt::Display for ClosestPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The closest pair of points are {} and {}. The distance between them is {} units.",
            self.first, self.second, self.distance
        )
    }
}
