//! 1-D gaussian smoothing for spike-rate display.
//!
//! The kernel is truncated at `4σ` and the signal is extended past its ends by
//! reflection (`d c b a | a b c d | d c b a`). Non-finite samples (bins with no
//! trials) are left out and the remaining kernel weights are renormalized, so a
//! gap does not drag the smoothed rate toward zero.

/// Kernel half-width in units of sigma.
const TRUNCATE: f64 = 4.0;

/// Kernel half-width cap, in signal lengths. Past this the reflected signal
/// just repeats, so wider kernels only add taps.
const MAX_RADIUS_LENGTHS: f64 = 2.0;

/// Smooth `values` with a gaussian of standard deviation `sigma` (in samples).
///
/// `sigma <= 0` (or non-finite) returns the input unchanged.
pub fn gaussian_filter(values: &[f64], sigma: f64) -> Vec<f64> {
    if !(sigma.is_finite() && sigma > 0.0) || values.is_empty() {
        return values.to_vec();
    }

    let n = values.len() as isize;
    let radius = (TRUNCATE * sigma + 0.5).min(MAX_RADIUS_LENGTHS * n as f64) as isize;
    let kernel: Vec<f64> = (-radius..=radius)
        .map(|k| {
            let x = k as f64;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    (0..n)
        .map(|i| {
            let mut acc = 0.0;
            let mut norm = 0.0;
            for (offset, w) in (-radius..=radius).zip(kernel.iter()) {
                let v = values[reflect(i + offset, n)];
                if v.is_finite() {
                    acc += w * v;
                    norm += w;
                }
            }
            if norm > 0.0 { acc / norm } else { f64::NAN }
        })
        .collect()
}

/// Index into a signal of length `n` extended by reflection on both sides.
fn reflect(idx: isize, n: isize) -> usize {
    let m = idx.rem_euclid(2 * n);
    (if m < n { m } else { 2 * n - 1 - m }) as usize
}
