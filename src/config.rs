//! Environment-driven settings.
//!
//! A `.env` file in the working directory is loaded first (if present), then:
//!
//! - `SPIKEFIT_LOG`: tracing filter directive (default `warn`)
//! - `SPIKEFIT_THREADS`: worker threads for parallel evaluation (default: rayon's choice)

use crate::error::{AppError, EXIT_USAGE};

const ENV_LOG: &str = "SPIKEFIT_LOG";
const ENV_THREADS: &str = "SPIKEFIT_THREADS";
const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub threads: Option<usize>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let log_filter = lookup(ENV_LOG)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG.to_string());

        let threads = match lookup(ENV_THREADS) {
            None => None,
            Some(raw) => {
                let n: usize = raw.trim().parse().map_err(|_| {
                    AppError::new(
                        EXIT_USAGE,
                        format!("{ENV_THREADS} must be a positive integer, got '{raw}'."),
                    )
                })?;
                if n == 0 {
                    return Err(AppError::new(EXIT_USAGE, format!("{ENV_THREADS} must be > 0.")));
                }
                Some(n)
            }
        };

        Ok(Self { log_filter, threads })
    }

    /// Size the global rayon pool. Only the first call in a process has effect.
    pub fn apply_thread_pool(&self) -> Result<(), AppError> {
        let Some(n) = self.threads else {
            return Ok(());
        };
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to configure thread pool: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.log_filter, "warn");
        assert_eq!(s.threads, None);
    }

    #[test]
    fn reads_both_variables() {
        let s = Settings::from_lookup(lookup(&[
            ("SPIKEFIT_LOG", "spikefit=debug"),
            ("SPIKEFIT_THREADS", " 4 "),
        ]))
        .unwrap();
        assert_eq!(s.log_filter, "spikefit=debug");
        assert_eq!(s.threads, Some(4));
    }

    #[test]
    fn rejects_bad_thread_counts() {
        for bad in ["zero", "0", "-2"] {
            let err = Settings::from_lookup(lookup(&[("SPIKEFIT_THREADS", bad)])).unwrap_err();
            assert_eq!(err.exit_code(), EXIT_USAGE);
        }
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let s = Settings::from_lookup(lookup(&[("SPIKEFIT_LOG", "  ")])).unwrap();
        assert_eq!(s.log_filter, "warn");
    }
}
