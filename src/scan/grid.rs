//! 1-D parameter grids for objective profiles.

use crate::domain::GridSpacing;
use crate::error::{AppError, EXIT_USAGE};

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn lin_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(AppError::new(
            EXIT_USAGE,
            format!("Invalid grid range: min={min}, max={max} (must be finite and max>min)."),
        ));
    }
    if steps < 2 {
        return Err(AppError::new(EXIT_USAGE, "Grid steps must be >= 2."));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| min + step * i as f64).collect();
    out[steps - 1] = max;
    Ok(out)
}

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && min > 0.0 && max > min) {
        return Err(AppError::new(
            EXIT_USAGE,
            format!("Invalid log grid range: min={min}, max={max} (must be finite, >0, and max>min)."),
        ));
    }

    Ok(lin_space(min.ln(), max.ln(), steps)?
        .into_iter()
        .map(f64::exp)
        .collect())
}

pub fn grid(min: f64, max: f64, steps: usize, spacing: GridSpacing) -> Result<Vec<f64>, AppError> {
    match spacing {
        GridSpacing::Lin => lin_space(min, max, steps),
        GridSpacing::Log => log_space(min, max, steps),
    }
}
