use crate::models::ClosestPairResult;
use crate::utils::geometry::Located;

/// Checks every pair in `points`, offering each one to `best`
///
/// Returns the smallest distance among `points` alone, or infinity when there
/// are fewer than two of them. Quadratic, so the solver only hands it ranges
/// of at most [`BRUTE_FORCE_LIMIT`](super::BRUTE_FORCE_LIMIT) points.
pub fn brute_force<T: Located>(points: &[T], best: &mut ClosestPairResult) -> f64 {
    let mut local = f64::INFINITY;

    for (i, a) in points.iter().enumerate() {
        let a = a.point();
        for b in &points[i + 1..] {
            let b = b.point();
            let distance = a.distance(&b);
            best.offer(a, b, distance);
            local = local.min(distance);
        }
    }

    local
}
