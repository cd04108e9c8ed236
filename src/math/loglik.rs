//! Bernoulli negative log-likelihood.
//!
//! For an observation `o` and predicted probability `p` the cost term is:
//!
//! ```text
//! -o * ln(p) - (1 - o) * ln(1 - p)
//! ```
//!
//! Numerical notes:
//! - A log term whose weight is exactly zero contributes zero (the `xlogy`
//!   convention), so `o = 0, p = 0` costs nothing while `o = 1, p = 0` is `+inf`.
//! - `ln(1 - p)` is computed as `ln_1p(-p)` to keep precision for small `p`.
//! - A prediction outside `[0, 1]` (or non-finite) has no Bernoulli meaning and
//!   yields `NaN`. Nothing is clamped; divergence is the caller's to interpret.
//! - Non-finite observations mark missing bins and are skipped.

use nalgebra::DMatrix;

/// Cost term for one observation/prediction pair.
pub fn bernoulli_term(o: f64, p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    xlogy(-o, p) + xlog1py(-(1.0 - o), -p)
}

/// Total cost over every finite observation.
///
/// `observed` and `predicted` must have the same shape.
pub fn bernoulli_nll(observed: &DMatrix<f64>, predicted: &DMatrix<f64>) -> f64 {
    debug_assert_eq!(observed.shape(), predicted.shape());
    observed
        .iter()
        .zip(predicted.iter())
        .filter(|(o, _)| o.is_finite())
        .map(|(&o, &p)| bernoulli_term(o, p))
        .sum()
}

/// Cost per time bin (column), summed over trials.
pub fn bernoulli_nll_by_bin(observed: &DMatrix<f64>, predicted: &DMatrix<f64>) -> Vec<f64> {
    debug_assert_eq!(observed.shape(), predicted.shape());
    (0..observed.ncols())
        .map(|j| {
            observed
                .column(j)
                .iter()
                .zip(predicted.column(j).iter())
                .filter(|(o, _)| o.is_finite())
                .map(|(&o, &p)| bernoulli_term(o, p))
                .sum()
        })
        .collect()
}

fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x * y.ln() }
}

fn xlog1py(x: f64, y: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x * y.ln_1p() }
}
