use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::data::model::{AsylumDataset, REQUIRED_COLUMNS};

/// Fixed export file name, written to the working directory and overwritten
/// on each export.
pub const EXPORT_FILE: &str = "AsylumData_filtered.xlsx";

// ---------------------------------------------------------------------------
// Spreadsheet export
// ---------------------------------------------------------------------------

/// Write the filtered rows to an xlsx workbook at `path`: one header row in
/// dataset column order, then one row per filtered record.
pub fn export_filtered(dataset: &AsylumDataset, indices: &[usize], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *name)
            .context("writing header row")?;
    }

    for (out_row, &i) in indices.iter().enumerate() {
        let rec = &dataset.records[i];
        let row = (out_row + 1) as u32;
        sheet
            .write_string(row, 0, &rec.year)
            .and_then(|s| s.write_string(row, 1, &rec.country))
            .and_then(|s| s.write_string(row, 2, &rec.origin))
            .and_then(|s| s.write_string(row, 3, &rec.procedure))
            .and_then(|s| s.write_number(row, 4, rec.applied))
            .and_then(|s| s.write_number(row, 5, rec.total_decisions))
            .and_then(|s| s.write_number(row, 6, rec.recognized))
            .and_then(|s| s.write_number(row, 7, rec.rejected))
            .and_then(|s| s.write_number(row, 8, rec.otherwise_closed))
            .and_then(|s| s.write_number(row, 9, rec.pending_start))
            .and_then(|s| s.write_number(row, 10, rec.pending_end))
            .with_context(|| format!("writing row {row}"))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    Ok(())
}

/// Hand the exported file to the platform default application. Best-effort:
/// an unsupported or failing opener is logged, never fatal.
pub fn open_exported(path: &Path) {
    if let Err(e) = open::that_detached(path) {
        log::warn!("could not open {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AsylumDataset, AsylumRecord};
    use std::fs;

    fn record(year: &str) -> AsylumRecord {
        AsylumRecord {
            year: year.to_string(),
            country: "Kenya".to_string(),
            origin: "Somalia".to_string(),
            procedure: "G / FI".to_string(),
            applied: 120.0,
            total_decisions: 80.0,
            recognized: 50.0,
            rejected: 25.0,
            otherwise_closed: 5.0,
            pending_start: 200.0,
            pending_end: 240.0,
        }
    }

    #[test]
    fn export_writes_a_workbook_and_overwrites_it() {
        let dir = std::env::temp_dir().join(format!(
            "asylum-dash-export-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        fs::create_dir_all(&dir).expect("should create temp dir");
        let path = dir.join(EXPORT_FILE);

        let ds = AsylumDataset::from_records(vec![record("2019"), record("2020")]);
        export_filtered(&ds, &[0, 1], &path).expect("export should succeed");
        let first_len = fs::metadata(&path).expect("file should exist").len();
        assert!(first_len > 0, "workbook should not be empty");

        // Export again with fewer rows: the file is replaced, not appended.
        export_filtered(&ds, &[0], &path).expect("re-export should succeed");
        assert!(fs::metadata(&path).expect("file should exist").len() > 0);

        fs::remove_dir_all(&dir).expect("should cleanup temp dir");
    }

    #[test]
    fn exporting_an_empty_view_writes_only_headers() {
        let dir = std::env::temp_dir().join(format!(
            "asylum-dash-export-empty-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        fs::create_dir_all(&dir).expect("should create temp dir");
        let path = dir.join(EXPORT_FILE);

        let ds = AsylumDataset::from_records(vec![record("2019")]);
        export_filtered(&ds, &[], &path).expect("empty export should succeed");
        assert!(path.exists());

        fs::remove_dir_all(&dir).expect("should cleanup temp dir");
    }
}
