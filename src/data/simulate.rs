//! Synthetic spike trains drawn from a model at known parameters.
//!
//! Each trial is assigned to exactly one of the two configured conditions
//! (probability 1/2 each), the model is evaluated, and every bin is drawn as an
//! independent Bernoulli spike with the predicted probability. The RNG is
//! seeded from the config, so the same config always yields the same dataset.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Bernoulli;

use crate::domain::{SimulationConfig, Truth};
use crate::error::{AppError, EXIT_NUMERIC, EXIT_USAGE};
use crate::models::{ModelContext, build_model};

#[derive(Debug, Clone)]
pub struct SimulatedData {
    pub context: ModelContext,
    pub truth: Truth,
}

pub fn simulate(config: &SimulationConfig) -> Result<SimulatedData, AppError> {
    if config.bins == 0 {
        return Err(AppError::new(EXIT_USAGE, "Bin count must be > 0."));
    }
    if config.trials == 0 {
        return Err(AppError::new(EXIT_USAGE, "Trial count must be > 0."));
    }
    if !(config.window_start.is_finite()
        && config.window_end.is_finite()
        && config.window_end > config.window_start)
    {
        return Err(AppError::new(
            EXIT_USAGE,
            format!(
                "Invalid time window: start={}, end={} (must be finite and end>start).",
                config.window_start, config.window_end
            ),
        ));
    }
    if config.labels.c1 == config.labels.c2 {
        return Err(AppError::new(EXIT_USAGE, "Condition labels must differ."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let time_window = bin_starts(config.window_start, config.window_end, config.bins);
    let conditions = assign_conditions(&mut rng, config);

    // Evaluate against an all-zero spike matrix of the right shape; predictions
    // do not depend on the observations.
    let shape_ctx = ModelContext::new(
        time_window.clone(),
        DMatrix::zeros(config.trials, config.bins),
        conditions.clone(),
    )?;
    let model = build_model(config.model, &shape_ctx, &config.labels)?;
    let predicted = model.model(&shape_ctx, &config.params)?;

    let mut spikes = DMatrix::<f64>::zeros(config.trials, config.bins);
    for i in 0..config.trials {
        for j in 0..config.bins {
            let p = predicted[(i, j)];
            let dist = Bernoulli::new(p).map_err(|_| {
                AppError::new(
                    EXIT_NUMERIC,
                    format!(
                        "Predicted spike probability {p} at trial {i}, bin {j} is outside [0, 1]."
                    ),
                )
            })?;
            if dist.sample(&mut rng) {
                spikes[(i, j)] = 1.0;
            }
        }
    }

    let total: f64 = spikes.iter().sum();
    tracing::info!(
        model = config.model.display_name(),
        trials = config.trials,
        bins = config.bins,
        seed = config.seed,
        spikes = total,
        "simulated spike trains"
    );

    let context = ModelContext::new(time_window, spikes, conditions)?;
    Ok(SimulatedData {
        context,
        truth: Truth {
            model: config.model,
            params: config.params.clone(),
        },
    })
}

/// Left edges of `bins` equal-width bins covering `[start, end)`.
pub fn bin_starts(start: f64, end: f64, bins: usize) -> Vec<f64> {
    let width = (end - start) / bins as f64;
    (0..bins).map(|j| start + width * j as f64).collect()
}

fn assign_conditions(rng: &mut StdRng, config: &SimulationConfig) -> BTreeMap<String, DVector<f64>> {
    let mut c1 = DVector::<f64>::zeros(config.trials);
    let mut c2 = DVector::<f64>::zeros(config.trials);
    for i in 0..config.trials {
        if rng.gen_bool(0.5) {
            c1[i] = 1.0;
        } else {
            c2[i] = 1.0;
        }
    }

    let mut out = BTreeMap::new();
    out.insert(config.labels.c1.clone(), c1);
    out.insert(config.labels.c2.clone(), c2);
    out
}
