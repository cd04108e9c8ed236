//! `spikefit` library crate.
//!
//! Parametric firing-rate models for binned spike trains, scored by Bernoulli
//! negative log-likelihood. The binary (`spk`) is a thin wrapper around this
//! library so that:
//!
//! - core logic is testable without spawning processes
//! - models can be driven directly by an external optimizer

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod scan;
