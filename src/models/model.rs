//! The firing-rate model contract.
//!
//! A concrete model is any type that can:
//! - name its free parameters, in the order they are unpacked from a flat vector
//! - predict a response matrix (`trials x bins`) for a parameter vector
//! - score a parameter vector with a cost an external solver minimizes
//!
//! Both evaluation functions take the shared [`ModelContext`] explicitly, so the
//! same model value can be driven concurrently from many threads.

use nalgebra::DMatrix;

use crate::domain::{ConditionLabels, ModelKind};
use crate::math::bernoulli_nll;
use crate::models::{CatTime, Const, ModelContext, ModelError, Time};

/// Default search box for rate-like parameters (per-bin spike probability).
pub const RATE_BOUNDS: (f64, f64) = (1e-4, 0.5);

pub trait FiringRateModel: Send + Sync {
    /// Short model name used in reports and errors.
    fn name(&self) -> &'static str;

    /// Parameter names, in vector order.
    fn param_names(&self) -> &'static [&'static str];

    /// Predicted response, same shape as `ctx.spikes()`.
    ///
    /// Fails only on contract violations (wrong parameter count, missing
    /// condition data). Out-of-range predictions are returned as computed.
    fn model(&self, ctx: &ModelContext, params: &[f64]) -> Result<DMatrix<f64>, ModelError>;

    /// Cost to minimize. Defaults to the Bernoulli negative log-likelihood of
    /// the observed spikes under `model(params)`.
    fn objective(&self, ctx: &ModelContext, params: &[f64]) -> Result<f64, ModelError> {
        let predicted = self.model(ctx, params)?;
        Ok(bernoulli_nll(ctx.spikes(), &predicted))
    }

    /// A search box per parameter, in vector order.
    ///
    /// Advisory only: `model` and `objective` do not enforce it.
    fn param_bounds(&self, ctx: &ModelContext) -> Vec<(f64, f64)>;

    fn n_params(&self) -> usize {
        self.param_names().len()
    }

    /// Fail fast if `params` does not have exactly `n_params()` entries.
    fn check_arity(&self, params: &[f64]) -> Result<(), ModelError> {
        if params.len() != self.n_params() {
            return Err(ModelError::ParamCount {
                model: self.name(),
                expected: self.n_params(),
                found: params.len(),
            });
        }
        Ok(())
    }

    /// Position of a named parameter in the vector.
    fn param_index(&self, name: &str) -> Result<usize, ModelError> {
        self.param_names()
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| ModelError::UnknownParam {
                model: self.name(),
                name: name.to_string(),
                known: self.param_names().join(", "),
            })
    }
}

/// Unpack a parameter slice into a fixed-size array, rejecting any other length.
pub fn unpack<const N: usize>(model: &'static str, params: &[f64]) -> Result<[f64; N], ModelError> {
    <[f64; N]>::try_from(params).map_err(|_| ModelError::ParamCount {
        model,
        expected: N,
        found: params.len(),
    })
}

/// Repeat one per-bin row for every trial.
pub fn broadcast_rows(n_trials: usize, row: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(n_trials, row.len(), |_, j| row[j])
}

/// Build the concrete model for `kind` against a context.
pub fn build_model(
    kind: ModelKind,
    ctx: &ModelContext,
    labels: &ConditionLabels,
) -> Result<Box<dyn FiringRateModel>, ModelError> {
    let model: Box<dyn FiringRateModel> = match kind {
        ModelKind::Const => Box::new(Const),
        ModelKind::Time => Box::new(Time),
        ModelKind::CatTime => Box::new(CatTime::new(ctx, &labels.c1, &labels.c2)?),
    };
    tracing::debug!(model = model.name(), params = ?model.param_names(), "built model");
    Ok(model)
}
