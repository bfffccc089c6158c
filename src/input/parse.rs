use crate::error::MalformedInput;
use crate::utils::geometry::{Axis, Point};

/// Parses a point count followed by that many coordinate pairs
///
/// Tokens may be separated by whitespace, commas or parentheses, so both
/// `2 0 0 3 4` and `2\n(0, 0)\n(3, 4)` describe the same two points. Anything
/// after the last pair is rejected.
///
/// The count itself is not checked against the two point minimum here; that is
/// left to [`PointSet::new`](crate::solver::PointSet::new).
pub fn parse_points(text: &str) -> Result<Vec<Point>, MalformedInput> {
    let mut tokens = text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|token| !token.is_empty());

    let count_token = tokens.next().ok_or(MalformedInput::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| MalformedInput::InvalidCount {
            token: count_token.to_string(),
        })?;

    let mut points = Vec::with_capacity(count.min(1 << 20));
    for point in 1..=count {
        let x = next_coordinate(&mut tokens, point, Axis::X)?;
        let y = next_coordinate(&mut tokens, point, Axis::Y)?;
        points.push(Point::new(x, y));
    }

    if let Some(token) = tokens.next() {
        return Err(MalformedInput::TrailingInput {
            token: token.to_string(),
        });
    }

    Ok(points)
}

fn next_coordinate<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    point: usize,
    axis: Axis,
) -> Result<f64, MalformedInput> {
    let token = tokens
        .next()
        .ok_or(MalformedInput::MissingCoordinate { point, axis })?;

    let value: f64 = token
        .parse()
        .map_err(|_| MalformedInput::InvalidCoordinate {
            point,
            axis,
            token: token.to_string(),
        })?;

    if !value.is_finite() {
        return Err(MalformedInput::NonFiniteCoordinate { point, axis });
    }

    Ok(value)
}
