//! Read/write dataset snapshot JSON files.
//!
//! A snapshot is the portable form of a `ModelContext`:
//! - the time window (one sample point per bin)
//! - spikes as rows of trials (`null` marks a missing bin)
//! - per-trial condition indicators keyed by label
//! - optional ground truth when the data was simulated
//!
//! Lab-format spike and condition files are not read here; they are expected to
//! be converted to this shape upstream.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::domain::Truth;
use crate::error::{AppError, EXIT_USAGE};
use crate::models::{ModelContext, ModelError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub time_window: Vec<f64>,
    pub spikes: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub conditions: BTreeMap<String, Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth: Option<Truth>,
}

impl DatasetFile {
    pub fn from_context(ctx: &ModelContext, truth: Option<Truth>) -> Self {
        let spikes: Vec<Vec<Option<f64>>> = ctx
            .spikes()
            .row_iter()
            .map(|row| row.iter().map(|&v| v.is_finite().then_some(v)).collect())
            .collect();
        let conditions: BTreeMap<String, Vec<f64>> = ctx
            .conditions()
            .iter()
            .map(|(label, c)| (label.clone(), c.iter().copied().collect()))
            .collect();

        Self {
            tool: "spk".to_string(),
            generated_at: Utc::now(),
            time_window: ctx.time_window().to_vec(),
            spikes,
            conditions,
            truth,
        }
    }

    /// Validate and convert to a model context.
    pub fn to_context(&self) -> Result<ModelContext, ModelError> {
        let n_bins = self.time_window.len();
        if let Some(row) = self.spikes.iter().find(|row| row.len() != n_bins) {
            return Err(ModelError::ShapeMismatch {
                what: "spike row vs time window",
                expected: n_bins,
                found: row.len(),
            });
        }

        let spikes = DMatrix::from_fn(self.spikes.len(), n_bins, |i, j| {
            self.spikes[i][j].unwrap_or(f64::NAN)
        });
        let conditions: BTreeMap<String, DVector<f64>> = self
            .conditions
            .iter()
            .map(|(label, c)| (label.clone(), DVector::from_column_slice(c)))
            .collect();

        ModelContext::new(self.time_window.clone(), spikes, conditions)
    }
}

/// Write a dataset JSON file.
pub fn write_dataset_json(path: &Path, dataset: &DatasetFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Failed to create dataset JSON '{}': {e}", path.display()),
        )
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write dataset JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write dataset JSON: {e}")))?;

    tracing::info!(path = %path.display(), trials = dataset.spikes.len(), "wrote dataset");
    Ok(())
}

/// Read a dataset JSON file.
pub fn read_dataset_json(path: &Path) -> Result<DatasetFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Failed to open dataset JSON '{}': {e}", path.display()),
        )
    })?;
    let dataset: DatasetFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Invalid dataset JSON: {e}")))?;
    Ok(dataset)
}
