use crate::models::ModelError;

/// Exit code for usage, configuration, and file errors.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for model contract violations (parameter count, shapes, labels).
pub const EXIT_CONTRACT: u8 = 3;
/// Exit code for numeric failures (e.g. predictions outside `[0, 1]` when sampling).
pub const EXIT_NUMERIC: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(EXIT_CONTRACT, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_contract_exit_code() {
        let err: AppError = ModelError::ParamCount {
            model: "time",
            expected: 4,
            found: 2,
        }
        .into();
        assert_eq!(err.exit_code(), EXIT_CONTRACT);
        assert_eq!(err.to_string(), "time expects 4 parameters, got 2");
    }
}
