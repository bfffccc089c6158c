use crate::error::{Error, Result};
use crate::solver::MIN_POINTS;
use crate::utils::geometry::Point;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use inquire::validator::Validation;
use inquire::CustomType;
use rand::Rng;
use tracing::info;

/// Asks how many points there are, failing early when there are too few
fn prompt_count(message: &str) -> Result<usize> {
    let count = inquire::prompt_u32(message)? as usize;
    if count < MIN_POINTS {
        return Err(Error::insufficient_input(count));
    }

    Ok(count)
}

fn prompt_coordinate(message: &str) -> Result<f64> {
    let value = CustomType::<f64>::new(message)
        .with_error_message("Please type a number")
        .with_validator(|value: &f64| {
            if value.is_finite() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Coordinates must be finite".into()))
            }
        })
        .prompt()?;

    Ok(value)
}

/// Reads every coordinate from the terminal, one prompt per value
pub fn prompt_points() -> Result<Vec<Point>> {
    let count = prompt_count("How many points are there on the 2D plane?")?;

    let mut points = Vec::with_capacity(count);
    for i in 1..=count {
        println!("Enter the coordinates of Point {i}");
        let x = prompt_coordinate(&format!("x{i}"))?;
        let y = prompt_coordinate(&format!("y{i}"))?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

/// Asks for a size and bound, then generates a random point cloud
pub fn prompt_random_points() -> Result<Vec<Point>> {
    let count = prompt_count("How many points should be generated?")?;
    let bound = CustomType::<f64>::new("How far from the origin may a coordinate be?")
        .with_default(1000.0)
        .with_error_message("Please type a number")
        .with_validator(|value: &f64| {
            if value.is_finite() && *value > 0.0 {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("The bound must be a positive number".into()))
            }
        })
        .prompt()?;

    let pb = ProgressBar::new(count as u64);
    pb.set_style(ProgressStyle::default_bar().progress_chars("=>="));

    let points = random_points(count, bound, &mut rand::rng(), pb.clone());
    pb.finish_and_clear();
    info!(count, bound, "generated random points");

    Ok(points)
}

/// Draws `count` points uniformly from the square `[-bound, bound]²`
pub fn random_points(count: usize, bound: f64, rng: &mut impl Rng, pb: ProgressBar) -> Vec<Point> {
    (0..count)
        .progress_with(pb)
        .map(|_| {
            Point::new(
                rng.random_range(-bound..=bound),
                rng.random_range(-bound..=bound),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_points_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = random_points(500, 2.5, &mut rng, ProgressBar::hidden());

        assert_eq!(points.len(), 500);
        assert!(points
            .iter()
            .all(|p| p.x.abs() <= 2.5 && p.y.abs() <= 2.5));
    }

    #[test]
    fn random_points_are_reproducible_from_a_seed() {
        let a = random_points(32, 10.0, &mut StdRng::seed_from_u64(3), ProgressBar::hidden());
        let b = random_points(32, 10.0, &mut StdRng::seed_from_u64(3), ProgressBar::hidden());
        assert_eq!(a, b);
    }
}
