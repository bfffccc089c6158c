use crate::choices::{Execution, InputSource};
use crate::error::{Error, Result};
use crate::input::{read_points, read_points_stdin};
use crate::models::ClosestPair;
use crate::solver::PointSet;
use crate::utils::geometry::Point;
use indicatif::ProgressBar;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::info;

/// Point sets at least this large get a spinner while they are searched
const SPINNER_THRESHOLD: usize = 100_000;

/// The interactive closest pair finder
pub struct ClosestPairApp {
    interactive: bool,
}

impl ClosestPairApp {
    pub fn new() -> Self {
        ClosestPairApp {
            interactive: std::io::stdin().is_terminal(),
        }
    }

    pub fn run() -> Result<()> {
        let app = ClosestPairApp::new();
        let answer = app.execute()?;
        println!("{answer}");
        Ok(())
    }

    fn select_input_source(&self) -> Result<InputSource> {
        InputSource::choice("Where should the points come from?")
            .map_err(|err| Error::Choice(err.to_string()))
    }

    fn select_execution(&self) -> Result<Execution> {
        Execution::choice("How should the search run?")
            .map_err(|err| Error::Choice(err.to_string()))
    }

    fn solve(points: &[Point], execution: Execution) -> Result<ClosestPair> {
        let set = PointSet::new(points)?;

        if set.len() < SPINNER_THRESHOLD {
            return set.closest_pair(execution);
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Searching {} points", set.len()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        let answer = set.closest_pair(execution);
        spinner.finish_and_clear();

        answer
    }

    fn execute(&self) -> Result<ClosestPair> {
        let (points, execution) = if self.interactive {
            let source = self.select_input_source()?;
            let points = read_points(source)?;
            (points, self.select_execution()?)
        } else {
            (read_points_stdin()?, Execution::Parallel)
        };

        info!(count = points.len(), ?execution, "read points");
        Self::solve(&points, execution)
    }
}

impl Default for ClosestPairApp {
    fn default() -> Self {
        Self::new()
    }
}
