use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CSV column names
// ---------------------------------------------------------------------------

/// Exact header names of the source CSV. Lookups fail hard when a required
/// column is missing, so the names live in one place.
pub const COL_YEAR: &str = "Year";
pub const COL_COUNTRY: &str = "Country / territory of asylum/residence";
pub const COL_ORIGIN: &str = "Origin";
pub const COL_PROCEDURE: &str = "RSD procedure type / level";
pub const COL_APPLIED: &str = "Applied during year";
pub const COL_TOTAL_DECISIONS: &str = "Total decisions";
pub const COL_RECOGNIZED: &str = "decisions_recognized";
pub const COL_REJECTED: &str = "Rejected";
pub const COL_OTHERWISE_CLOSED: &str = "Otherwise closed";
pub const COL_PENDING_START: &str = "Total pending start-year";
pub const COL_PENDING_END: &str = "Total pending end-year";

/// All required columns, in export order.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    COL_YEAR,
    COL_COUNTRY,
    COL_ORIGIN,
    COL_PROCEDURE,
    COL_APPLIED,
    COL_TOTAL_DECISIONS,
    COL_RECOGNIZED,
    COL_REJECTED,
    COL_OTHERWISE_CLOSED,
    COL_PENDING_START,
    COL_PENDING_END,
];

// ---------------------------------------------------------------------------
// AsylumRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single asylum-statistics row. Categorical columns stay as strings
/// (Year included, mirroring the source data's categorical treatment);
/// numeric columns are `f64` with blank cells read as 0.
#[derive(Debug, Clone, Deserialize)]
pub struct AsylumRecord {
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Country / territory of asylum/residence")]
    pub country: String,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "RSD procedure type / level")]
    pub procedure: String,
    #[serde(rename = "Applied during year", deserialize_with = "blank_as_zero")]
    pub applied: f64,
    #[serde(rename = "Total decisions", deserialize_with = "blank_as_zero")]
    pub total_decisions: f64,
    #[serde(rename = "decisions_recognized", deserialize_with = "blank_as_zero")]
    pub recognized: f64,
    #[serde(rename = "Rejected", deserialize_with = "blank_as_zero")]
    pub rejected: f64,
    #[serde(rename = "Otherwise closed", deserialize_with = "blank_as_zero")]
    pub otherwise_closed: f64,
    #[serde(rename = "Total pending start-year", deserialize_with = "blank_as_zero")]
    pub pending_start: f64,
    #[serde(rename = "Total pending end-year", deserialize_with = "blank_as_zero")]
    pub pending_end: f64,
}

/// Blank numeric cells sum as 0; anything else must parse as a number.
fn blank_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("'{trimmed}' is not a number")))
}

// ---------------------------------------------------------------------------
// AsylumDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed sorted distinct values for each
/// categorical column. Immutable after load; queries only read from it.
#[derive(Debug, Clone, Default)]
pub struct AsylumDataset {
    /// All rows, in file order.
    pub records: Vec<AsylumRecord>,
    /// Sorted distinct years.
    pub years: Vec<String>,
    /// Sorted distinct countries of asylum.
    pub countries: Vec<String>,
    /// Sorted distinct origins.
    pub origins: Vec<String>,
    /// Sorted distinct procedure types.
    pub procedures: Vec<String>,
}

impl AsylumDataset {
    /// Build the distinct-value indices from the loaded rows.
    pub fn from_records(records: Vec<AsylumRecord>) -> Self {
        let mut years: BTreeSet<String> = BTreeSet::new();
        let mut countries: BTreeSet<String> = BTreeSet::new();
        let mut origins: BTreeSet<String> = BTreeSet::new();
        let mut procedures: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year.clone());
            countries.insert(rec.country.clone());
            origins.insert(rec.origin.clone());
            procedures.insert(rec.procedure.clone());
        }

        AsylumDataset {
            records,
            years: years.into_iter().collect(),
            countries: countries.into_iter().collect(),
            origins: origins.into_iter().collect(),
            procedures: procedures.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, country: &str, origin: &str, procedure: &str) -> AsylumRecord {
        AsylumRecord {
            year: year.to_string(),
            country: country.to_string(),
            origin: origin.to_string(),
            procedure: procedure.to_string(),
            applied: 0.0,
            total_decisions: 0.0,
            recognized: 0.0,
            rejected: 0.0,
            otherwise_closed: 0.0,
            pending_start: 0.0,
            pending_end: 0.0,
        }
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let ds = AsylumDataset::from_records(vec![
            record("2020", "Kenya", "Somalia", "G / FI"),
            record("2019", "Kenya", "Ethiopia", "G / FI"),
            record("2019", "Uganda", "Somalia", "U / FI"),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years, vec!["2019", "2020"], "years sorted ascending");
        assert_eq!(ds.countries, vec!["Kenya", "Uganda"]);
        assert_eq!(ds.origins, vec!["Ethiopia", "Somalia"]);
        assert_eq!(ds.procedures, vec!["G / FI", "U / FI"]);
    }

    #[test]
    fn empty_dataset_has_no_distinct_values() {
        let ds = AsylumDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.years.is_empty());
        assert!(ds.countries.is_empty());
    }
}
