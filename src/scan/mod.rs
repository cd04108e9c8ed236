//! Objective profiling.
//!
//! Responsibilities:
//!
//! - generate 1-D parameter grids (linear or log spaced)
//! - evaluate the objective along one parameter (parallel)

pub mod grid;
pub mod profile;

pub use grid::*;
pub use profile::*;
