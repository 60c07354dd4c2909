use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

// Column layout of the UN WPP export: index, variant, label, notes,
// location code, type, parent code, then one ratio per sampled year.
const INDEX_COLUMN: usize = 0;
const LABEL_COLUMN: usize = 2;
const FIRST_RATIO_COLUMN: usize = 7;

/// Sampled years 1950..=2020, every five years. Aggregate rows in the
/// source data carry one fewer trailing column than country rows.
pub const MAX_SAMPLES: usize = 15;
pub const MIN_SAMPLES: usize = 14;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no record labelled {0:?} in the dataset")]
    LabelNotFound(String),

    #[error("no country with index {0} in the dataset")]
    IndexNotFound(u32),

    #[error("record {label:?} holds {found} ratio columns, expected at least 14")]
    TruncatedRecord { label: String, found: usize },

    #[error("record {label:?} column {column} holds a non-numeric ratio {value:?}")]
    BadRatio {
        label: String,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn open(path: &Path) -> Result<csv::Reader<File>, DatasetError> {
    // The file has no header row, and row widths vary (14 vs 15 samples).
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

/// Scan the dataset for the record labelled `label` and return its ratio
/// series in year order. First matching record wins.
pub fn series_for_label(path: &Path, label: &str) -> Result<Vec<f64>, DatasetError> {
    let mut reader = open(path)?;
    for record in reader.records() {
        let record = record?;
        if record.get(LABEL_COLUMN) != Some(label) {
            continue;
        }

        let end = (FIRST_RATIO_COLUMN + MAX_SAMPLES).min(record.len());
        let mut series = Vec::with_capacity(MAX_SAMPLES);
        for column in FIRST_RATIO_COLUMN..end {
            let raw = &record[column];
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| DatasetError::BadRatio {
                    label: label.to_string(),
                    column,
                    value: raw.to_string(),
                })?;
            series.push(value);
        }

        if series.len() < MIN_SAMPLES {
            return Err(DatasetError::TruncatedRecord {
                label: label.to_string(),
                found: series.len(),
            });
        }

        debug!(label, samples = series.len(), "matched dataset record");
        return Ok(series);
    }

    Err(DatasetError::LabelNotFound(label.to_string()))
}

/// Resolve a country index (column 0) to its label. First match wins.
pub fn country_by_index(path: &Path, index: u32) -> Result<String, DatasetError> {
    let needle = index.to_string();
    let mut reader = open(path)?;
    for record in reader.records() {
        let record = record?;
        if record.get(INDEX_COLUMN) == Some(needle.as_str()) {
            if let Some(label) = record.get(LABEL_COLUMN) {
                debug!(index, label, "resolved country index");
                return Ok(label.to_string());
            }
        }
    }

    Err(DatasetError::IndexNotFound(index))
}
