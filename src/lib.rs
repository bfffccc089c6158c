//! Closest pair of points in the plane, found by divide and conquer in O(n log n).

pub mod app;
pub mod choices;
pub mod error;
mod impls;
pub mod input;
pub mod models;
pub mod solver;
pub mod utils;

pub use error::{Error, MalformedInput, Result};
pub use models::{ClosestPair, ClosestPairResult, SearchStats};
pub use solver::{closest_pair, closest_pair_with, PointSet};
pub use utils::geometry::{Axis, Point};
