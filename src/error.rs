//! Error types for reading point sets and solving closest pair queries.

use thiserror::Error;

use crate::utils::geometry::Axis;

/// Errors that end a closest pair run.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer points than a pair needs.
    #[error("Please enter the coordinates for at least {required} points (got {actual})")]
    InsufficientInput {
        /// Minimum number of points
        required: usize,
        /// Number of points supplied
        actual: usize,
    },

    /// The point list could not be read.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// An interactive prompt failed or was cancelled.
    #[error("Failed to get user input: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// A menu selection failed or was cancelled.
    #[error("Failed to get user selection: {0}")]
    Choice(String),

    /// Reading a file or standard input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file dialog could not be shown.
    #[error("File dialog error: {0}")]
    Dialog(String),

    /// The file dialog was closed without picking a file.
    #[error("No file selected")]
    NoFileSelected,
}

/// Ways a textual point list can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// The input holds no tokens at all.
    #[error("expected a point count but the input is empty")]
    MissingCount,

    /// The leading count is not a non-negative integer.
    #[error("point count `{token}` is not a non-negative integer")]
    InvalidCount { token: String },

    /// The input ends before a coordinate of a counted point.
    #[error("point {point} is missing its {axis} coordinate")]
    MissingCoordinate { point: usize, axis: Axis },

    /// A coordinate token does not parse as a number.
    #[error("{axis} coordinate of point {point} is not a number: `{token}`")]
    InvalidCoordinate {
        point: usize,
        axis: Axis,
        token: String,
    },

    /// A coordinate is NaN or infinite.
    #[error("{axis} coordinate of point {point} is not finite")]
    NonFiniteCoordinate { point: usize, axis: Axis },

    /// Tokens remain after the last counted point.
    #[error("unexpected trailing input `{token}`")]
    TrailingInput { token: String },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an InsufficientInput error for a pair query.
    pub fn insufficient_input(actual: usize) -> Self {
        Self::InsufficientInput {
            required: crate::solver::MIN_POINTS,
            actual,
        }
    }
}
