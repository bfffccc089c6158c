use crate::utils::geometry::{Axis, Located};

/// Returns a copy of `items` sorted ascending by the coordinate selected by `axis`
///
/// Top-down merge sort. Equal keys keep their input order, which the partition
/// step depends on to split the x- and y-orderings consistently.
///
/// # Example
/// ```
/// use closest_pair::solver::sorting::sort_by_axis;
/// use closest_pair::utils::geometry::{Axis, Point};
///
/// let points = [Point::new(3.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 1.0)];
/// let by_y = sort_by_axis(&points, Axis::Y);
/// assert_eq!(by_y[0], Point::new(3.0, 0.0));
/// ```
pub fn sort_by_axis<T: Located + Copy>(items: &[T], axis: Axis) -> Vec<T> {
    let mut sorted = items.to_vec();
    merge_sort(&mut sorted, axis);
    sorted
}

fn merge_sort<T: Located + Copy>(items: &mut [T], axis: Axis) {
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], axis);
    merge_sort(&mut items[mid..], axis);
    merge(items, mid, axis);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]` in place
fn merge<T: Located + Copy>(items: &mut [T], mid: usize, axis: Axis) {
    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // `<=` takes from the left run on ties
        let take_left = j >= right.len()
            || (i < left.len()
                && left[i].point().coord(axis) <= right[j].point().coord(axis));

        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
