use super::model::AsylumDataset;

// ---------------------------------------------------------------------------
// Filter predicate: one selection per categorical column
// ---------------------------------------------------------------------------

/// A single selector value: either "All" (no constraint) or one categorical
/// value taken from the dataset's distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Whether a row's cell satisfies this selector.
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(v) => v == cell,
        }
    }

    /// Label shown in the combo box.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => "All",
            Selection::Value(v) => v,
        }
    }
}

/// The four selector values owned by the UI layer. Every view derives from
/// the dataset plus this state; nothing else feeds the recomputation.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub year: Selection,
    pub country: Selection,
    pub origin: Selection,
    pub procedure: Selection,
}

/// Return indices of rows that pass all active selectors.
///
/// Selectors combine conjunctively; `All` imposes no constraint, so four
/// `All` selectors return every index. An empty result is a valid output.
pub fn filtered_indices(dataset: &AsylumDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            filters.year.matches(&rec.year)
                && filters.country.matches(&rec.country)
                && filters.origin.matches(&rec.origin)
                && filters.procedure.matches(&rec.procedure)
        })
        .map(|(i, _)| i)
        .collect()
}
