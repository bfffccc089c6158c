use closest_pair::choices::Execution;
use closest_pair::input::{parse_points, random_points};
use closest_pair::{closest_pair, closest_pair_with, Error, MalformedInput, Point, PointSet};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn brute_force_minimum(points: &[Point]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(a.distance(b));
        }
    }
    best
}

fn lattice_points(rng: &mut StdRng, count: usize, side: i32) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                f64::from(rng.random_range(0..side)),
                f64::from(rng.random_range(0..side)),
            )
        })
        .collect()
}

#[test]
fn matches_brute_force_on_small_random_sets() {
    let mut rng = StdRng::seed_from_u64(0xc10_5e57);

    for round in 0..400 {
        let count = rng.random_range(2..=50);
        let points = random_points(count, 100.0, &mut rng, ProgressBar::hidden());

        let answer = closest_pair(&points).unwrap();
        assert_eq!(
            answer.distance,
            brute_force_minimum(&points),
            "round {round}: {points:?}"
        );
    }
}

#[test]
fn matches_brute_force_with_many_ties() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..400 {
        let count = rng.random_range(2..=50);
        // A small lattice forces shared x and y coordinates and duplicate points.
        let points = lattice_points(&mut rng, count, 6);

        let answer = closest_pair(&points).unwrap();
        assert_eq!(
            answer.distance,
            brute_force_minimum(&points),
            "round {round}: {points:?}"
        );
    }
}

#[test]
fn reported_pair_is_at_reported_distance() {
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..200 {
        let count = rng.random_range(2..=300);
        let points = random_points(count, 50.0, &mut rng, ProgressBar::hidden());

        let answer = closest_pair(&points).unwrap();
        assert_eq!(answer.first.distance(&answer.second), answer.distance);
        assert!(points.contains(&answer.first));
        assert!(points.contains(&answer.second));
    }
}

#[test]
fn repeated_runs_agree() {
    let mut rng = StdRng::seed_from_u64(1234);
    let points = lattice_points(&mut rng, 1_000, 400);

    let first = closest_pair(&points).unwrap();
    let second = closest_pair(&points).unwrap();
    assert_eq!(first.distance, second.distance);
}

#[test]
fn larger_random_set_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(77);
    let points = random_points(2_000, 1_000.0, &mut rng, ProgressBar::hidden());

    assert_eq!(
        closest_pair(&points).unwrap().distance,
        brute_force_minimum(&points)
    );
}

#[test]
fn parallel_search_agrees_with_sequential() {
    let mut rng = StdRng::seed_from_u64(2024);
    let points = random_points(20_000, 10_000.0, &mut rng, ProgressBar::hidden());

    let sequential = closest_pair_with(&points, Execution::Sequential).unwrap();
    let parallel = closest_pair_with(&points, Execution::Parallel).unwrap();

    assert_eq!(sequential.distance, parallel.distance);
    assert_eq!(parallel.first.distance(&parallel.second), parallel.distance);
    assert_eq!(sequential.stats.base_cases, parallel.stats.base_cases);
    assert_eq!(sequential.stats.strip_scans, parallel.stats.strip_scans);
}

#[test]
fn all_identical_points() {
    let points = vec![Point::new(-3.0, 8.0); 64];
    let answer = closest_pair(&points).unwrap();

    assert_eq!(answer.distance, 0.0);
    assert_eq!(answer.stats.strip_comparisons, 0);
}

#[test]
fn collinear_points() {
    let points = parse_points("4 (0,0) (1,0) (2,0) (5,0)").unwrap();
    let answer = closest_pair(&points).unwrap();

    assert_eq!(answer.distance, 1.0);
    assert_eq!(
        (answer.first, answer.second),
        (Point::new(0.0, 0.0), Point::new(1.0, 0.0))
    );
}

#[test]
fn classic_scenario() {
    let points = parse_points("6\n2 3\n12 30\n40 50\n5 1\n12 10\n3 4\n").unwrap();
    let answer = closest_pair(&points).unwrap();

    assert!((answer.distance - 1.414_213_56).abs() < 1e-8);
    let mut pair = [answer.first, answer.second];
    pair.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(pair, [Point::new(2.0, 3.0), Point::new(3.0, 4.0)]);
}

#[test]
fn single_point_is_rejected() {
    let points = parse_points("1 4 4").unwrap();

    match closest_pair(&points) {
        Err(err @ Error::InsufficientInput { .. }) => {
            assert_eq!(
                err.to_string(),
                "Please enter the coordinates for at least 2 points (got 1)"
            );
        }
        other => panic!("expected InsufficientInput, got {other:?}"),
    }
}

#[test]
fn malformed_input_is_rejected_before_solving() {
    assert!(matches!(
        parse_points("3 0 0 1 1 2"),
        Err(MalformedInput::MissingCoordinate { point: 3, .. })
    ));
}

#[test]
fn strip_scans_stay_linear_near_the_dividing_line() {
    let mut rng = StdRng::seed_from_u64(5);

    // Two columns hugging x = 0 with tiny jitter: nearly every point lands in
    // every strip along the way down the recursion.
    let mut points = Vec::new();
    for i in 0..4_000_i32 {
        let y = f64::from(i);
        points.push(Point::new(rng.random_range(-1e-6..1e-6), y));
        points.push(Point::new(1.0 + rng.random_range(-1e-6..1e-6), y + 0.5));
    }

    let answer = closest_pair(&points).unwrap();
    let stats = answer.stats;

    assert!(stats.strip_points > 0);
    assert!(
        stats.strip_comparisons <= 7 * stats.strip_points,
        "{} comparisons over {} strip points",
        stats.strip_comparisons,
        stats.strip_points
    );
    assert_eq!(answer.distance, brute_force_minimum(&points));
}

#[test]
fn strip_scans_stay_linear_on_a_dense_lattice() {
    let points: Vec<Point> = (0..60_i32)
        .flat_map(|x| (0..60_i32).map(move |y| Point::new(f64::from(x), f64::from(y))))
        .collect();

    let set = PointSet::new(&points).unwrap();
    let answer = set.closest_pair(Execution::Sequential).unwrap();

    assert_eq!(answer.distance, 1.0);
    assert!(answer.stats.strip_comparisons <= 7 * answer.stats.strip_points);
}

#[test]
fn far_apart_points_do_not_overflow() {
    let points = [Point::new(1e200, 0.0), Point::new(-1e200, 0.0)];
    let answer = closest_pair(&points).unwrap();

    assert_eq!(answer.distance, 2e200);
    assert!(points.contains(&answer.first));
    assert!(points.contains(&answer.second));
}

#[test]
fn huge_coordinates_match_brute_force() {
    let points: Vec<Point> = [0.0, 1e160, 5e170, 9e170, 1.3e171]
        .iter()
        .map(|&x| Point::new(x, 0.0))
        .collect();
    let answer = closest_pair(&points).unwrap();

    assert_eq!(answer.distance, 1e160);
    assert_eq!(answer.distance, brute_force_minimum(&points));
    assert_eq!(answer.first.distance(&answer.second), answer.distance);
}

#[test]
fn distances_beyond_f64_still_report_a_pair() {
    // Every pairwise gap exceeds f64::MAX, so the distance is infinite.
    let points = [
        Point::new(f64::MAX, f64::MAX),
        Point::new(-f64::MAX, -f64::MAX),
        Point::new(f64::MAX, -f64::MAX),
        Point::new(-f64::MAX, f64::MAX),
    ];
    let answer = closest_pair(&points).unwrap();

    assert!(answer.distance.is_infinite());
    assert!(points.contains(&answer.first));
    assert!(points.contains(&answer.second));
    assert_ne!(answer.first, answer.second);
}
