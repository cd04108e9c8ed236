//! Unit-height gaussian bump used by the time-dependent firing-rate models.
//!
//! `g(t; μ, σ) = exp(-(t - μ)^2 / (2 σ^2))`
//!
//! The peak value is exactly `1.0` at `t = μ`, so an amplitude parameter
//! multiplying `g` is directly the height of the rate bump.
//!
//! No guarding is done for `σ = 0`: the result is `NaN` at the center and `0`
//! elsewhere, and that propagates to the caller unchanged.

/// Evaluate the unit gaussian bump at `t`.
pub fn gaussian_bump(t: f64, mu: f64, sigma: f64) -> f64 {
    let d = t - mu;
    (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// Evaluate the bump over a whole time window.
pub fn gaussian_curve(times: &[f64], mu: f64, sigma: f64) -> Vec<f64> {
    times.iter().map(|&t| gaussian_bump(t, mu, sigma)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_is_one_at_center() {
        assert_eq!(gaussian_bump(0.0, 0.0, 1.0), 1.0);
        assert_eq!(gaussian_bump(250.0, 250.0, 40.0), 1.0);
    }

    #[test]
    fn one_sigma_away_matches_closed_form() {
        let v = gaussian_bump(3.0, 1.0, 2.0);
        assert!((v - (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn curve_is_symmetric_about_center() {
        let times = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let g = gaussian_curve(&times, 0.0, 1.5);
        assert!((g[0] - g[4]).abs() < 1e-15);
        assert!((g[1] - g[3]).abs() < 1e-15);
        assert!(g[2] > g[1] && g[1] > g[0]);
    }
}
