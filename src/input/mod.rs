//! Ways of getting a point set into the solver

pub mod parse;
pub mod prompt;

use crate::choices::InputSource;
use crate::error::{Error, Result};
use crate::utils::geometry::Point;
use native_dialog::DialogBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use parse::parse_points;
pub use prompt::{prompt_points, prompt_random_points, random_points};

/// Collects points from the source the user picked
pub fn read_points(source: InputSource) -> Result<Vec<Point>> {
    match source {
        InputSource::Manual => prompt_points(),
        InputSource::File => {
            println!("Please select a file of points");
            let path = select_file()?;
            read_points_file(&path)
        }
        InputSource::Random => prompt_random_points(),
    }
}

/// Reads a whole point list from standard input
pub fn read_points_stdin() -> Result<Vec<Point>> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    debug!(bytes = text.len(), "read point list from stdin");

    Ok(parse_points(&text)?)
}

/// Reads and parses a point list stored in a text file
pub fn read_points_file(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    info!(path = %path.display(), count = points.len(), "loaded points");

    Ok(points)
}

fn select_file() -> Result<PathBuf> {
    DialogBuilder::file()
        .add_filter("Point lists", ["txt", "csv"])
        .open_single_file()
        .show()
        .map_err(|err| Error::Dialog(err.to_string()))?
        .ok_or(Error::NoFileSelected)
}
