//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model selection (`ModelKind`, `ConditionLabels`)
//! - ground truth recorded by the simulator (`Truth`)
//! - per-command configuration (`SimulationConfig`, `EvalConfig`, `ScanConfig`)

pub mod types;

pub use types::*;
