//! Export per-bin evaluation results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AppError, EXIT_USAGE};
use crate::report::Evaluation;

/// Write per-bin results to a CSV file.
pub fn write_eval_csv(path: &Path, eval: &Evaluation) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;
    let mut w = BufWriter::new(file);

    writeln!(w, "model,condition,time,observed_rate,predicted_rate,nll")
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write export CSV header: {e}")))?;

    let condition = eval.condition.as_deref().unwrap_or("");
    for b in &eval.bins {
        writeln!(
            w,
            "{},{},{},{},{:.10},{:.10}",
            eval.model,
            condition,
            b.time,
            fmt_rate(b.observed_rate),
            b.predicted_rate,
            b.nll,
        )
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write export CSV row: {e}")))?;
    }

    w.flush()
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write export CSV: {e}")))?;
    Ok(())
}

/// Empty cell for bins with no observations.
fn fmt_rate(v: f64) -> String {
    if v.is_finite() { format!("{v:.10}") } else { String::new() }
}
