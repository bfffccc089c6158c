use crate::models::ClosestPairResult;
use crate::utils::geometry::Located;

/// Outcome of a single strip scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripScan {
    /// The smallest of `d` and every distance found inside the strip
    pub distance: f64,
    /// Number of pairs whose distance was computed
    pub comparisons: usize,
}

/// Looks for pairs closer than `d` inside a strip sorted ascending by y
///
/// For each point only the successors whose y-gap is strictly below the best
/// distance so far are compared. Points on the same side of the dividing line
/// are at least `d` apart, so a `d` by `2d` box above any point holds at most
/// seven others and the scan stays linear in the strip size. The loop relies
/// on the y-gap test alone, not on that constant.
pub fn scan_strip<T: Located>(strip: &[T], d: f64, best: &mut ClosestPairResult) -> StripScan {
    let mut distance = d;
    let mut comparisons = 0;

    for (i, lower) in strip.iter().enumerate() {
        let lower = lower.point();
        for upper in &strip[i + 1..] {
            let upper = upper.point();
            if upper.y - lower.y >= distance {
                break;
            }

            comparisons += 1;
            let candidate = lower.distance(&upper);
            best.offer(lower, upper, candidate);
            distance = distance.min(candidate);
        }
    }

    StripScan {
        distance,
        comparisons,
    }
}
