//! Category-conditioned gaussian firing field.
//!
//! Each trial belongs to one of two labelled conditions (or neither). The bump
//! shape (`ut`, `st`) is shared; its amplitude depends on the condition:
//!
//! `p(trial, t) = (c1[trial] * a_1 + c2[trial] * a_2) * g(t; ut, st) + a_0`
//!
//! `c1`/`c2` are the indicator vectors of the two labels in the context.

use nalgebra::DMatrix;

use crate::math::gaussian_curve;
use crate::models::{FiringRateModel, ModelContext, ModelError, RATE_BOUNDS, unpack};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatTime {
    c1: String,
    c2: String,
}

impl CatTime {
    const PARAMS: [&'static str; 5] = ["a_1", "a_2", "ut", "st", "a_0"];

    /// Bind the model to two condition labels, which must exist in `ctx`.
    pub fn new(ctx: &ModelContext, c1: &str, c2: &str) -> Result<Self, ModelError> {
        ctx.condition(c1)?;
        ctx.condition(c2)?;
        Ok(Self {
            c1: c1.to_string(),
            c2: c2.to_string(),
        })
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.c1, &self.c2)
    }
}

impl FiringRateModel for CatTime {
    fn name(&self) -> &'static str {
        "cat_time"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &Self::PARAMS
    }

    fn model(&self, ctx: &ModelContext, params: &[f64]) -> Result<DMatrix<f64>, ModelError> {
        let [a_1, a_2, ut, st, a_0] = unpack::<5>(self.name(), params)?;
        let c1 = ctx.condition(&self.c1)?;
        let c2 = ctx.condition(&self.c2)?;
        let g = gaussian_curve(ctx.time_window(), ut, st);

        Ok(DMatrix::from_fn(ctx.n_trials(), ctx.n_bins(), |i, j| {
            (c1[i] * a_1 + c2[i] * a_2) * g[j] + a_0
        }))
    }

    fn param_bounds(&self, ctx: &ModelContext) -> Vec<(f64, f64)> {
        let (t_min, t_max) = ctx.window_range();
        let span = (t_max - t_min).max(f64::EPSILON);
        vec![RATE_BOUNDS, RATE_BOUNDS, (t_min, t_max), (span * 1e-2, span), RATE_BOUNDS]
    }
}
