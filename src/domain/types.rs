//! Shared domain types.
//!
//! These are kept small and serializable so they can be:
//!
//! - parsed straight from CLI flags
//! - recorded in dataset snapshot files
//! - passed between the pipeline stages without re-validation

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which firing-rate model to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Constant rate, `[a_0]`.
    Const,
    /// Gaussian bump in time plus offset, `[a_1, ut, st, a_0]`.
    Time,
    /// Condition-scaled gaussian bump plus offset, `[a_1, a_2, ut, st, a_0]`.
    CatTime,
}

impl ModelKind {
    /// Name used in reports; matches `FiringRateModel::name`.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Const => "const",
            ModelKind::Time => "time",
            ModelKind::CatTime => "cat_time",
        }
    }

    /// Whether the model reads condition indicators.
    pub fn uses_conditions(self) -> bool {
        matches!(self, ModelKind::CatTime)
    }
}

/// Which two condition labels the category model reads as `c1` and `c2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionLabels {
    pub c1: String,
    pub c2: String,
}

impl Default for ConditionLabels {
    fn default() -> Self {
        Self {
            c1: "1".to_string(),
            c2: "2".to_string(),
        }
    }
}

/// Ground truth recorded alongside simulated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truth {
    pub model: ModelKind,
    pub params: Vec<f64>,
}

/// Spacing of a 1-D parameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridSpacing {
    Lin,
    Log,
}

/// Settings for generating a synthetic spike-train dataset.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub model: ModelKind,
    pub params: Vec<f64>,
    pub labels: ConditionLabels,
    /// Window start (inclusive), in the time unit of the window (usually ms).
    pub window_start: f64,
    /// Window end (exclusive).
    pub window_end: f64,
    pub bins: usize,
    pub trials: usize,
    pub seed: u64,
}

/// A second model scored alongside the main one, typically its richer or
/// poorer variant (e.g. `time` against `cat_time`).
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub model: ModelKind,
    pub params: Vec<f64>,
}

/// Settings for scoring one parameter vector against a dataset.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub data_path: PathBuf,
    pub model: ModelKind,
    pub params: Vec<f64>,
    pub labels: ConditionLabels,
    /// Restrict the PSTH/plot to one condition.
    pub condition: Option<String>,
    /// Gaussian smoothing width for the observed rate, in bins.
    pub smooth_sigma: f64,
    /// Overlay a second model's predicted rate.
    pub compare: Option<Comparison>,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
}

/// Settings for an objective profile along one parameter.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub data_path: PathBuf,
    pub model: ModelKind,
    /// Values for all parameters; the scanned one is overridden per grid point.
    pub params: Vec<f64>,
    pub labels: ConditionLabels,
    pub param: String,
    /// Grid range; falls back to the model's advisory bounds.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub steps: usize,
    pub spacing: GridSpacing,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}
