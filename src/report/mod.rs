//! Reporting utilities: per-bin evaluation, PSTH, and formatted terminal output.

pub mod format;

pub use format::*;

use nalgebra::DMatrix;

use crate::math::{bernoulli_nll, bernoulli_nll_by_bin};
use crate::models::{FiringRateModel, ModelContext, ModelError};

/// Observed vs predicted rate in one time bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEvaluation {
    pub time: f64,
    /// Mean observed spike rate over the selected trials (`NaN` if all missing).
    pub observed_rate: f64,
    /// Mean predicted spike probability over the selected trials.
    pub predicted_rate: f64,
    /// Bernoulli cost of this bin summed over all trials.
    pub nll: f64,
}

/// A scored parameter vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub model: &'static str,
    pub param_names: Vec<&'static str>,
    pub params: Vec<f64>,
    pub objective: f64,
    pub n_trials: usize,
    pub n_observations: usize,
    pub condition: Option<String>,
    pub bins: Vec<BinEvaluation>,
}

impl Evaluation {
    /// Objective divided by the number of finite observations.
    pub fn objective_per_observation(&self) -> f64 {
        if self.n_observations == 0 {
            return f64::NAN;
        }
        self.objective / self.n_observations as f64
    }
}

/// Score `params` and break the result down per time bin.
///
/// `condition` only restricts which trials feed the observed/predicted rates;
/// the objective always covers every trial. The model is evaluated once and the
/// objective is the Bernoulli NLL of that prediction.
pub fn evaluate(
    model: &dyn FiringRateModel,
    ctx: &ModelContext,
    params: &[f64],
    condition: Option<&str>,
) -> Result<Evaluation, ModelError> {
    model.check_arity(params)?;
    let predicted = model.model(ctx, params)?;
    let objective = bernoulli_nll(ctx.spikes(), &predicted);
    if !objective.is_finite() {
        tracing::warn!(model = model.name(), objective, "objective is not finite");
    }

    let observed_rate = psth(ctx, condition)?;
    let predicted_rate = mean_over_trials(&predicted, trial_mask(ctx, condition)?.as_deref());
    let nll = bernoulli_nll_by_bin(ctx.spikes(), &predicted);

    let bins = ctx
        .time_window()
        .iter()
        .enumerate()
        .map(|(j, &time)| BinEvaluation {
            time,
            observed_rate: observed_rate[j],
            predicted_rate: predicted_rate[j],
            nll: nll[j],
        })
        .collect();

    Ok(Evaluation {
        model: model.name(),
        param_names: model.param_names().to_vec(),
        params: params.to_vec(),
        objective,
        n_trials: ctx.n_trials(),
        n_observations: ctx.n_observations(),
        condition: condition.map(str::to_string),
        bins,
    })
}

/// Peri-stimulus time histogram: mean spike count per bin across trials.
///
/// With `condition`, only trials whose indicator is non-zero are averaged.
/// Missing bins are skipped; a bin with no observations is `NaN`.
pub fn psth(ctx: &ModelContext, condition: Option<&str>) -> Result<Vec<f64>, ModelError> {
    let mask = trial_mask(ctx, condition)?;
    Ok(mean_over_trials(ctx.spikes(), mask.as_deref()))
}

fn trial_mask(ctx: &ModelContext, condition: Option<&str>) -> Result<Option<Vec<bool>>, ModelError> {
    match condition {
        None => Ok(None),
        Some(label) => {
            let indicator = ctx.condition(label)?;
            Ok(Some(indicator.iter().map(|&c| c != 0.0).collect()))
        }
    }
}

fn mean_over_trials(values: &DMatrix<f64>, mask: Option<&[bool]>) -> Vec<f64> {
    (0..values.ncols())
        .map(|j| {
            let mut sum = 0.0;
            let mut n = 0usize;
            for (i, &v) in values.column(j).iter().enumerate() {
                let selected = mask.map(|m| m[i]).unwrap_or(true);
                if selected && v.is_finite() {
                    sum += v;
                    n += 1;
                }
            }
            if n == 0 { f64::NAN } else { sum / n as f64 }
        })
        .collect()
}
