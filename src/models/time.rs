//! Single time-dependent gaussian firing field plus a constant offset.
//!
//! `p(t) = a_1 * exp(-(t - ut)^2 / (2 st^2)) + a_0`
//!
//! The prediction does not depend on the trial, so every row is the same.

use nalgebra::DMatrix;

use crate::math::gaussian_curve;
use crate::models::{FiringRateModel, ModelContext, ModelError, RATE_BOUNDS, broadcast_rows, unpack};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time;

impl Time {
    const PARAMS: [&'static str; 4] = ["a_1", "ut", "st", "a_0"];

    /// One predicted row over the time window.
    pub fn rate_curve(&self, ctx: &ModelContext, params: &[f64]) -> Result<Vec<f64>, ModelError> {
        let [a_1, ut, st, a_0] = unpack::<4>(self.name(), params)?;
        Ok(gaussian_curve(ctx.time_window(), ut, st)
            .into_iter()
            .map(|g| a_1 * g + a_0)
            .collect())
    }
}

impl FiringRateModel for Time {
    fn name(&self) -> &'static str {
        "time"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &Self::PARAMS
    }

    fn model(&self, ctx: &ModelContext, params: &[f64]) -> Result<DMatrix<f64>, ModelError> {
        let row = self.rate_curve(ctx, params)?;
        Ok(broadcast_rows(ctx.n_trials(), &row))
    }

    fn param_bounds(&self, ctx: &ModelContext) -> Vec<(f64, f64)> {
        let (t_min, t_max) = ctx.window_range();
        let span = (t_max - t_min).max(f64::EPSILON);
        vec![RATE_BOUNDS, (t_min, t_max), (span * 1e-2, span), RATE_BOUNDS]
    }
}
