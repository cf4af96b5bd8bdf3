use std::collections::BTreeMap;

use super::model::{AsylumDataset, AsylumRecord};

/// Rankings show at most this many groups.
pub const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// KPI reduction
// ---------------------------------------------------------------------------

/// The summary numbers shown at the top of the dashboard. Pure function of
/// the filtered view; an empty view yields all zeros (rates 0, never NaN).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Kpis {
    pub total_applications: i64,
    pub total_decisions: i64,
    pub recognized: i64,
    pub rejected: i64,
    /// recognized / total decisions × 100, or 0 when there are no decisions.
    pub recognition_rate: f64,
    /// rejected / total decisions × 100, or 0 when there are no decisions.
    pub rejection_rate: f64,
    /// pending at end of year minus pending at start.
    pub pending_change: i64,
}

pub fn kpis(dataset: &AsylumDataset, indices: &[usize]) -> Kpis {
    let mut applied = 0.0;
    let mut decisions = 0.0;
    let mut recognized = 0.0;
    let mut rejected = 0.0;
    let mut pending_start = 0.0;
    let mut pending_end = 0.0;

    for &i in indices {
        let rec = &dataset.records[i];
        applied += rec.applied;
        decisions += rec.total_decisions;
        recognized += rec.recognized;
        rejected += rec.rejected;
        pending_start += rec.pending_start;
        pending_end += rec.pending_end;
    }

    let recognition_rate = if decisions > 0.0 {
        recognized / decisions * 100.0
    } else {
        0.0
    };
    let rejection_rate = if decisions > 0.0 {
        rejected / decisions * 100.0
    } else {
        0.0
    };

    Kpis {
        total_applications: applied as i64,
        total_decisions: decisions as i64,
        recognized: recognized as i64,
        rejected: rejected as i64,
        recognition_rate,
        rejection_rate,
        pending_change: (pending_end - pending_start) as i64,
    }
}

// ---------------------------------------------------------------------------
// Trend aggregations (group by year, sum)
// ---------------------------------------------------------------------------

/// Decisions broken down by outcome for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionsByYear {
    pub year: String,
    pub recognized: f64,
    pub rejected: f64,
    pub otherwise_closed: f64,
}

fn group_by_year<F>(dataset: &AsylumDataset, indices: &[usize], value: F) -> Vec<(String, f64)>
where
    F: Fn(&AsylumRecord) -> f64,
{
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *sums.entry(rec.year.as_str()).or_default() += value(rec);
    }
    sums.into_iter().map(|(y, v)| (y.to_string(), v)).collect()
}

/// Applications per year, ordered by year.
pub fn applications_by_year(dataset: &AsylumDataset, indices: &[usize]) -> Vec<(String, f64)> {
    group_by_year(dataset, indices, |rec| rec.applied)
}

/// Recognized / rejected / otherwise-closed sums per year, ordered by year.
pub fn decisions_by_year(dataset: &AsylumDataset, indices: &[usize]) -> Vec<DecisionsByYear> {
    let mut sums: BTreeMap<&str, (f64, f64, f64)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let entry = sums.entry(rec.year.as_str()).or_default();
        entry.0 += rec.recognized;
        entry.1 += rec.rejected;
        entry.2 += rec.otherwise_closed;
    }
    sums.into_iter()
        .map(|(year, (recognized, rejected, otherwise_closed))| DecisionsByYear {
            year: year.to_string(),
            recognized,
            rejected,
            otherwise_closed,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ranking aggregations (group, sum applications, top 10)
// ---------------------------------------------------------------------------

fn top_groups<F>(dataset: &AsylumDataset, indices: &[usize], key: F) -> Vec<(String, f64)>
where
    F: Fn(&AsylumRecord) -> &str,
{
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *sums.entry(key(rec)).or_default() += rec.applied;
    }

    let mut ranked: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    // Stable sort keeps ties in alphabetical (BTreeMap) order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(TOP_N);
    ranked
}

/// Top 10 countries of asylum by summed applications, descending.
pub fn top_countries(dataset: &AsylumDataset, indices: &[usize]) -> Vec<(String, f64)> {
    top_groups(dataset, indices, |rec| rec.country.as_str())
}

/// Top 10 origins by summed applications, descending.
pub fn top_origins(dataset: &AsylumDataset, indices: &[usize]) -> Vec<(String, f64)> {
    top_groups(dataset, indices, |rec| rec.origin.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterState, Selection};

    fn record(year: &str, country: &str, origin: &str, applied: f64) -> AsylumRecord {
        AsylumRecord {
            year: year.to_string(),
            country: country.to_string(),
            origin: origin.to_string(),
            procedure: "G / FI".to_string(),
            applied,
            total_decisions: applied / 2.0,
            recognized: applied / 4.0,
            rejected: applied / 8.0,
            otherwise_closed: applied / 8.0,
            pending_start: 10.0,
            pending_end: 15.0,
        }
    }

    #[test]
    fn kpi_sums_match_the_filtered_subset() {
        let ds = AsylumDataset::from_records(vec![
            record("2019", "Kenya", "Somalia", 120.0),
            record("2019", "Uganda", "Somalia", 80.0),
            record("2020", "Kenya", "Ethiopia", 40.0),
        ]);
        let filters = FilterState {
            year: Selection::Value("2019".to_string()),
            ..Default::default()
        };
        let idx = filtered_indices(&ds, &filters);
        assert!(idx.iter().all(|&i| ds.records[i].year == "2019"));

        let k = kpis(&ds, &idx);
        assert_eq!(k.total_applications, 200, "KPI matches subset sum");
        assert_eq!(k.total_decisions, 100);
        assert_eq!(k.pending_change, 10, "two rows, +5 pending each");
    }

    #[test]
    fn rates_are_zero_when_there_are_no_decisions() {
        let mut rec = record("2019", "Kenya", "Somalia", 50.0);
        rec.total_decisions = 0.0;
        rec.recognized = 0.0;
        rec.rejected = 0.0;
        let ds = AsylumDataset::from_records(vec![rec]);

        let k = kpis(&ds, &[0]);
        assert_eq!(k.recognition_rate, 0.0, "no decisions means rate 0, not NaN");
        assert_eq!(k.rejection_rate, 0.0);
        assert!(!k.recognition_rate.is_nan());
    }

    #[test]
    fn empty_view_yields_all_zero_kpis() {
        let ds = AsylumDataset::from_records(vec![record("2019", "Kenya", "Somalia", 50.0)]);
        let k = kpis(&ds, &[]);
        assert_eq!(k, Kpis::default());
    }

    #[test]
    fn empty_view_yields_empty_chart_series() {
        let ds = AsylumDataset::from_records(vec![
            record("2019", "Kenya", "Somalia", 50.0),
            record("2020", "Uganda", "Ethiopia", 30.0),
        ]);

        assert!(applications_by_year(&ds, &[]).is_empty());
        assert!(decisions_by_year(&ds, &[]).is_empty());
        assert!(top_countries(&ds, &[]).is_empty());
        assert!(top_origins(&ds, &[]).is_empty());
    }

    #[test]
    fn rates_need_not_sum_to_one_hundred() {
        // 100 decisions: 40 recognized, 30 rejected, 30 otherwise closed.
        let mut rec = record("2019", "Kenya", "Somalia", 100.0);
        rec.total_decisions = 100.0;
        rec.recognized = 40.0;
        rec.rejected = 30.0;
        rec.otherwise_closed = 30.0;
        let ds = AsylumDataset::from_records(vec![rec]);

        let k = kpis(&ds, &[0]);
        assert_eq!(k.recognition_rate, 40.0);
        assert_eq!(k.rejection_rate, 30.0);
        assert!(k.recognition_rate + k.rejection_rate < 100.0);
    }

    #[test]
    fn trends_group_by_year_in_order() {
        let ds = AsylumDataset::from_records(vec![
            record("2020", "Kenya", "Somalia", 40.0),
            record("2019", "Kenya", "Somalia", 120.0),
            record("2019", "Uganda", "Ethiopia", 80.0),
        ]);
        let idx: Vec<usize> = (0..ds.len()).collect();

        let apps = applications_by_year(&ds, &idx);
        assert_eq!(
            apps,
            vec![("2019".to_string(), 200.0), ("2020".to_string(), 40.0)]
        );

        let decisions = decisions_by_year(&ds, &idx);
        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0].year, "2019");
        assert_eq!(decisions[0].recognized, 50.0, "120/4 + 80/4");
    }

    #[test]
    fn rankings_are_descending_and_capped_at_ten() {
        let records: Vec<AsylumRecord> = (0..15)
            .map(|i| record("2019", &format!("Country {i:02}"), "Somalia", i as f64))
            .collect();
        let ds = AsylumDataset::from_records(records);
        let idx: Vec<usize> = (0..ds.len()).collect();

        let top = top_countries(&ds, &idx);
        assert_eq!(top.len(), TOP_N, "at most ten groups");
        assert_eq!(top[0], ("Country 14".to_string(), 14.0));
        assert!(
            top.windows(2).all(|w| w[0].1 >= w[1].1),
            "sorted descending by applications"
        );
    }

    #[test]
    fn ranking_ties_stay_in_alphabetical_order() {
        let ds = AsylumDataset::from_records(vec![
            record("2019", "Kenya", "Zimbabwe", 50.0),
            record("2019", "Kenya", "Angola", 50.0),
        ]);
        let idx: Vec<usize> = (0..ds.len()).collect();

        let top = top_origins(&ds, &idx);
        assert_eq!(top[0].0, "Angola");
        assert_eq!(top[1].0, "Zimbabwe");
    }
}
