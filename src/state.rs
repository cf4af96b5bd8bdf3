use std::path::PathBuf;

use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::AsylumDataset;
use crate::export;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which main-panel tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Analysis,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<AsylumDataset>,

    /// Current selector values (Year, Country, Origin, Procedure).
    pub filters: FilterState,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Active main-panel tab.
    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            tab: Tab::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the filters to "All".
    pub fn set_dataset(&mut self, dataset: AsylumDataset) {
        self.filters = FilterState::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a selector change. Every derived
    /// view (KPIs, trends, rankings) reads from the recomputed set.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Export the currently filtered rows to the fixed-named workbook in the
    /// working directory, then hand it to the platform opener.
    pub fn export_filtered(&mut self) {
        let Some(ds) = &self.dataset else {
            self.status_message = Some("No dataset loaded.".to_string());
            return;
        };
        let path = PathBuf::from(export::EXPORT_FILE);
        match export::export_filtered(ds, &self.visible_indices, &path) {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    self.visible_indices.len(),
                    path.display()
                );
                self.status_message = Some(format!(
                    "Exported {} rows to {}",
                    self.visible_indices.len(),
                    path.display()
                ));
                export::open_exported(&path);
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}
