//! Objective profile along one parameter.
//!
//! Given a full parameter vector, we sweep one named entry over a grid and
//! score each point with the model's objective. Grid points are independent and
//! evaluated in parallel; results come back in grid order.
//!
//! This is a diagnostic slice through the cost surface (shape of the valley,
//! divergence near the edges), not an optimizer: the other parameters stay
//! fixed.

use rayon::prelude::*;

use crate::models::{FiringRateModel, ModelContext, ModelError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub value: f64,
    pub objective: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub model: &'static str,
    pub param: String,
    pub base: Vec<f64>,
    pub points: Vec<ProfilePoint>,
}

impl Profile {
    /// Lowest finite objective; ties go to the earliest grid point.
    pub fn best(&self) -> Option<ProfilePoint> {
        let mut best: Option<ProfilePoint> = None;
        for p in self.points.iter().filter(|p| p.objective.is_finite()) {
            if best.is_none_or(|b| p.objective < b.objective) {
                best = Some(*p);
            }
        }
        best
    }

    /// Number of grid points whose objective diverged.
    pub fn non_finite_count(&self) -> usize {
        self.points.iter().filter(|p| !p.objective.is_finite()).count()
    }
}

/// Evaluate the objective with `param` set to each value in `grid`.
pub fn profile(
    model: &dyn FiringRateModel,
    ctx: &ModelContext,
    base: &[f64],
    param: &str,
    grid: &[f64],
) -> Result<Profile, ModelError> {
    model.check_arity(base)?;
    let idx = model.param_index(param)?;

    let points = grid
        .par_iter()
        .map(|&value| {
            let mut params = base.to_vec();
            params[idx] = value;
            model
                .objective(ctx, &params)
                .map(|objective| ProfilePoint { value, objective })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let profile = Profile {
        model: model.name(),
        param: param.to_string(),
        base: base.to_vec(),
        points,
    };

    tracing::info!(
        model = profile.model,
        param,
        points = profile.points.len(),
        non_finite = profile.non_finite_count(),
        "profiled objective"
    );
    Ok(profile)
}
