use thiserror::Error;

/// Contract violations raised by the model layer.
///
/// Numeric divergence is *not* represented here: a non-finite objective is a
/// value, not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{model} expects {expected} parameters, got {found}")]
    ParamCount {
        model: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{model} has no parameter named '{name}' (expected one of: {known})")]
    UnknownParam {
        model: &'static str,
        name: String,
        known: String,
    },

    #[error("shape mismatch in {what}: expected {expected}, got {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("condition '{label}' is not present in the dataset")]
    MissingCondition { label: String },

    #[error("time window is empty")]
    EmptyWindow,

    #[error("dataset has no trials")]
    NoTrials,

    #[error("condition '{label}' has a non-finite indicator at trial {trial}")]
    NonFiniteCondition { label: String, trial: usize },

    #[error("time window has a non-finite sample at index {index}")]
    NonFiniteWindow { index: usize },
}
