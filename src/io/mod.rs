//! Input/output helpers.
//!
//! - dataset snapshot JSON read/write (`dataset`)
//! - per-bin evaluation exports (CSV) (`export`)

pub mod dataset;
pub mod export;

pub use dataset::*;
pub use export::*;
