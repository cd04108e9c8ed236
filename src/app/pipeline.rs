//! Shared pipeline logic behind the CLI subcommands.
//!
//! Each `run_*` function computes everything a subcommand prints or writes, so
//! `app` only deals with presentation and the integration tests can drive the
//! same code paths without a process.

use std::path::Path;

use crate::data::{SimulatedData, simulate};
use crate::domain::{EvalConfig, ScanConfig, SimulationConfig};
use crate::error::{AppError, EXIT_USAGE};
use crate::io::dataset::{DatasetFile, read_dataset_json, write_dataset_json};
use crate::math::gaussian_filter;
use crate::models::{ModelContext, build_model};
use crate::report::{Evaluation, evaluate};
use crate::scan::{Profile, grid, profile};

/// A dataset file together with its validated context.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: DatasetFile,
    pub context: ModelContext,
}

/// Read a dataset snapshot and validate it into a [`ModelContext`].
pub fn load_data(path: &Path) -> Result<LoadedData, AppError> {
    let dataset = read_dataset_json(path)?;
    let context = dataset.to_context().map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Invalid dataset {}: {e}", path.display()),
        )
    })?;
    tracing::info!(
        path = %path.display(),
        trials = context.n_trials(),
        bins = context.n_bins(),
        conditions = context.conditions().len(),
        "loaded dataset"
    );
    Ok(LoadedData { dataset, context })
}

/// Simulate a dataset and write it to `out`.
pub fn run_simulate(config: &SimulationConfig, out: &Path) -> Result<SimulatedData, AppError> {
    let data = simulate(config)?;
    let file = DatasetFile::from_context(&data.context, Some(data.truth.clone()));
    write_dataset_json(out, &file)?;
    Ok(data)
}

/// All computed outputs of `spk eval`.
#[derive(Debug, Clone)]
pub struct EvalOutput {
    pub data: LoadedData,
    pub evaluation: Evaluation,
    /// Observed rate after gaussian smoothing (equal to the raw PSTH when smoothing is off).
    pub smoothed_rate: Vec<f64>,
    /// The `--vs-model` evaluation, over the same trials and condition.
    pub comparison: Option<Evaluation>,
}

pub fn run_eval(config: &EvalConfig) -> Result<EvalOutput, AppError> {
    if !(config.smooth_sigma.is_finite() && config.smooth_sigma >= 0.0) {
        return Err(AppError::new(
            EXIT_USAGE,
            format!("Smoothing width must be finite and >= 0, got {}.", config.smooth_sigma),
        ));
    }

    let data = load_data(&config.data_path)?;
    let model = build_model(config.model, &data.context, &config.labels)?;
    let evaluation = evaluate(
        model.as_ref(),
        &data.context,
        &config.params,
        config.condition.as_deref(),
    )?;

    let comparison = match &config.compare {
        None => None,
        Some(cmp) => {
            let other = build_model(cmp.model, &data.context, &config.labels)?;
            Some(evaluate(
                other.as_ref(),
                &data.context,
                &cmp.params,
                config.condition.as_deref(),
            )?)
        }
    };

    let observed: Vec<f64> = evaluation.bins.iter().map(|b| b.observed_rate).collect();
    let smoothed_rate = gaussian_filter(&observed, config.smooth_sigma);

    Ok(EvalOutput {
        data,
        evaluation,
        smoothed_rate,
        comparison,
    })
}

/// All computed outputs of `spk scan`.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub data: LoadedData,
    pub profile: Profile,
}

pub fn run_scan(config: &ScanConfig) -> Result<ScanOutput, AppError> {
    let data = load_data(&config.data_path)?;
    let model = build_model(config.model, &data.context, &config.labels)?;
    model.check_arity(&config.params)?;
    let idx = model.param_index(&config.param)?;

    let (lo, hi) = model.param_bounds(&data.context)[idx];
    let min = config.min.unwrap_or(lo);
    let max = config.max.unwrap_or(hi);
    let values = grid(min, max, config.steps, config.spacing)?;

    let profile = profile(
        model.as_ref(),
        &data.context,
        &config.params,
        &config.param,
        &values,
    )?;

    Ok(ScanOutput { data, profile })
}
