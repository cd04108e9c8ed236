//! Immutable data handed to every model evaluation.
//!
//! A `ModelContext` is built once per fitting session from already-loaded
//! arrays and is then only read. Models never stash state of their own between
//! calls; everything they need comes through here.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};

use crate::models::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelContext {
    time_window: Vec<f64>,
    spikes: DMatrix<f64>,
    conditions: BTreeMap<String, DVector<f64>>,
}

impl ModelContext {
    /// Validate shapes and build a context.
    ///
    /// - `time_window`: one sample point per bin (non-empty, finite).
    /// - `spikes`: `trials x bins`, at least one trial; non-finite entries mark
    ///   missing bins.
    /// - `conditions`: per-trial indicator vectors, each of length `trials`,
    ///   all entries finite.
    pub fn new(
        time_window: Vec<f64>,
        spikes: DMatrix<f64>,
        conditions: BTreeMap<String, DVector<f64>>,
    ) -> Result<Self, ModelError> {
        if time_window.is_empty() {
            return Err(ModelError::EmptyWindow);
        }
        if let Some(index) = time_window.iter().position(|t| !t.is_finite()) {
            return Err(ModelError::NonFiniteWindow { index });
        }
        if spikes.nrows() == 0 {
            return Err(ModelError::NoTrials);
        }
        if spikes.ncols() != time_window.len() {
            return Err(ModelError::ShapeMismatch {
                what: "spike bins vs time window",
                expected: time_window.len(),
                found: spikes.ncols(),
            });
        }
        for (label, indicator) in &conditions {
            if indicator.len() != spikes.nrows() {
                return Err(ModelError::ShapeMismatch {
                    what: "condition indicator vs trials",
                    expected: spikes.nrows(),
                    found: indicator.len(),
                });
            }
            if let Some(trial) = indicator.iter().position(|c| !c.is_finite()) {
                return Err(ModelError::NonFiniteCondition {
                    label: label.clone(),
                    trial,
                });
            }
        }

        Ok(Self {
            time_window,
            spikes,
            conditions,
        })
    }

    pub fn time_window(&self) -> &[f64] {
        &self.time_window
    }

    pub fn spikes(&self) -> &DMatrix<f64> {
        &self.spikes
    }

    pub fn conditions(&self) -> &BTreeMap<String, DVector<f64>> {
        &self.conditions
    }

    /// Indicator vector for a condition label.
    pub fn condition(&self, label: &str) -> Result<&DVector<f64>, ModelError> {
        self.conditions
            .get(label)
            .ok_or_else(|| ModelError::MissingCondition {
                label: label.to_string(),
            })
    }

    /// `(min, max)` of the time window.
    pub fn window_range(&self) -> (f64, f64) {
        self.time_window
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| (lo.min(t), hi.max(t)))
    }

    pub fn n_trials(&self) -> usize {
        self.spikes.nrows()
    }

    pub fn n_bins(&self) -> usize {
        self.time_window.len()
    }

    /// Number of finite (non-missing) observations.
    pub fn n_observations(&self) -> usize {
        self.spikes.iter().filter(|v| v.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn accepts_consistent_shapes() {
        let mut conditions = BTreeMap::new();
        conditions.insert("1".to_string(), DVector::from_vec(vec![1.0, 0.0]));
        let ctx = ModelContext::new(window(3), DMatrix::zeros(2, 3), conditions).unwrap();
        assert_eq!(ctx.n_trials(), 2);
        assert_eq!(ctx.n_bins(), 3);
        assert_eq!(ctx.n_observations(), 6);
        assert!(ctx.condition("1").is_ok());
    }

    #[test]
    fn rejects_bin_count_mismatch() {
        let err = ModelContext::new(window(4), DMatrix::zeros(2, 3), BTreeMap::new()).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { expected: 4, found: 3, .. }));
    }

    #[test]
    fn rejects_indicator_length_mismatch() {
        let mut conditions = BTreeMap::new();
        conditions.insert("1".to_string(), DVector::from_vec(vec![1.0, 0.0, 1.0]));
        let err = ModelContext::new(window(3), DMatrix::zeros(2, 3), conditions).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { expected: 2, found: 3, .. }));
    }

    #[test]
    fn rejects_empty_or_non_finite_window() {
        assert_eq!(
            ModelContext::new(vec![], DMatrix::zeros(1, 0), BTreeMap::new()).unwrap_err(),
            ModelError::EmptyWindow
        );
        assert_eq!(
            ModelContext::new(vec![0.0, f64::NAN], DMatrix::zeros(1, 2), BTreeMap::new())
                .unwrap_err(),
            ModelError::NonFiniteWindow { index: 1 }
        );
    }

    #[test]
    fn rejects_zero_trials() {
        assert_eq!(
            ModelContext::new(window(3), DMatrix::zeros(0, 3), BTreeMap::new()).unwrap_err(),
            ModelError::NoTrials
        );
    }

    #[test]
    fn rejects_non_finite_indicators() {
        let mut conditions = BTreeMap::new();
        conditions.insert("1".to_string(), DVector::from_vec(vec![1.0, f64::NAN]));
        assert_eq!(
            ModelContext::new(window(3), DMatrix::zeros(2, 3), conditions).unwrap_err(),
            ModelError::NonFiniteCondition { label: "1".to_string(), trial: 1 }
        );
    }

    #[test]
    fn missing_bins_are_not_observations() {
        let spikes = DMatrix::from_row_slice(1, 3, &[1.0, f64::NAN, 0.0]);
        let ctx = ModelContext::new(window(3), spikes, BTreeMap::new()).unwrap();
        assert_eq!(ctx.n_observations(), 2);
    }

    #[test]
    fn unknown_condition_is_an_error() {
        let ctx = ModelContext::new(window(2), DMatrix::zeros(1, 2), BTreeMap::new()).unwrap();
        assert_eq!(
            ctx.condition("7").unwrap_err(),
            ModelError::MissingCondition { label: "7".to_string() }
        );
    }
}
