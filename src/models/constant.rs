//! Constant firing rate: `p = a_0` in every bin of every trial.
//!
//! This is the baseline that time-dependent models are compared against.

use nalgebra::DMatrix;

use crate::models::{FiringRateModel, ModelContext, ModelError, unpack};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Const;

impl FiringRateModel for Const {
    fn name(&self) -> &'static str {
        "const"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &["a_0"]
    }

    fn model(&self, ctx: &ModelContext, params: &[f64]) -> Result<DMatrix<f64>, ModelError> {
        let [a_0] = unpack::<1>(self.name(), params)?;
        Ok(DMatrix::from_element(ctx.n_trials(), ctx.n_bins(), a_0))
    }

    fn param_bounds(&self, _ctx: &ModelContext) -> Vec<(f64, f64)> {
        vec![(1e-4, 1.0 - 1e-4)]
    }
}
