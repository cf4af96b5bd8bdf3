use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{AsylumDataset, AsylumRecord, REQUIRED_COLUMNS};

/// Default dataset looked for in the working directory at startup.
pub const DEFAULT_DATASET: &str = "asylum_seekers_final.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with the input file. Any of these aborts the load;
/// there is no partial ingestion.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the asylum dataset from a CSV file.
///
/// The header row must contain every column in [`REQUIRED_COLUMNS`] by exact
/// name. Extra columns (notably a leading pandas index column such as
/// "Unnamed: 0") are ignored. Blank numeric cells read as 0; any other
/// malformed cell fails the load with row context.
pub fn load_csv(path: &Path) -> Result<AsylumDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col))
                .with_context(|| format!("validating headers of {}", path.display()));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<AsylumRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(AsylumDataset::from_records(records))
}
