//! Firing-rate models and the contract they implement.
//!
//! Models are plain values implementing [`FiringRateModel`]; all data comes in
//! through a shared, immutable [`ModelContext`] so the same model can be scored
//! from many threads at once.

pub mod cat_time;
pub mod constant;
pub mod context;
pub mod error;
pub mod model;
pub mod time;

pub use cat_time::*;
pub use constant::*;
pub use context::*;
pub use error::*;
pub use model::*;
pub use time::*;
