//! Terminal plots: rate curves, objective profiles, spike rasters.

pub mod ascii;

pub use ascii::*;
