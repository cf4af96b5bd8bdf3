use std::ops::RangeInclusive;

use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color::generate_palette;
use crate::data::aggregate::{self, Kpis};
use crate::data::model::AsylumDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary tab: KPI row + two trend charts
// ---------------------------------------------------------------------------

pub fn summary_tab(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_placeholder(ui);
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Executive Summary");
            ui.add_space(8.0);

            let kpis = aggregate::kpis(dataset, &state.visible_indices);
            kpi_row(ui, &kpis);
            ui.add_space(12.0);

            decisions_chart(ui, dataset, &state.visible_indices);
            ui.add_space(12.0);
            applications_chart(ui, dataset, &state.visible_indices);
        });
}

fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    ui.columns(4, |cols: &mut [Ui]| {
        kpi_card(&mut cols[0], "Total Applications", thousands(kpis.total_applications));
        kpi_card(&mut cols[1], "Recognition Rate", format!("{:.1}%", kpis.recognition_rate));
        kpi_card(&mut cols[2], "Rejection Rate", format!("{:.1}%", kpis.rejection_rate));
        kpi_card(&mut cols[3], "Pending Change", thousands(kpis.pending_change));
    });
}

fn kpi_card(ui: &mut Ui, name: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(name);
            ui.heading(RichText::new(value).strong());
        });
    });
}

fn applications_chart(ui: &mut Ui, dataset: &AsylumDataset, indices: &[usize]) {
    let series = aggregate::applications_by_year(dataset, indices);
    let labels: Vec<String> = series.iter().map(|(year, _)| year.clone()).collect();

    let points: PlotPoints = series
        .iter()
        .enumerate()
        .map(|(i, (_, total))| [i as f64, *total])
        .collect();

    ui.strong("Applications Over Time");
    Plot::new("applications_over_time")
        .legend(Legend::default())
        .height(280.0)
        .x_axis_label("Year")
        .x_axis_formatter(category_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Applied during year").width(1.5));
        });
}

fn decisions_chart(ui: &mut Ui, dataset: &AsylumDataset, indices: &[usize]) {
    let series = aggregate::decisions_by_year(dataset, indices);
    let labels: Vec<String> = series.iter().map(|row| row.year.clone()).collect();
    let colors = generate_palette(3);

    let as_points = |f: &dyn Fn(&aggregate::DecisionsByYear) -> f64| -> PlotPoints {
        series
            .iter()
            .enumerate()
            .map(|(i, row)| [i as f64, f(row)])
            .collect()
    };
    let recognized = as_points(&|row| row.recognized);
    let rejected = as_points(&|row| row.rejected);
    let closed = as_points(&|row| row.otherwise_closed);

    ui.strong("Decisions Breakdown Over Time");
    Plot::new("decisions_breakdown")
        .legend(Legend::default())
        .height(280.0)
        .x_axis_label("Year")
        .x_axis_formatter(category_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(recognized).name("Recognized").color(colors[0]).width(1.5));
            plot_ui.line(Line::new(rejected).name("Rejected").color(colors[1]).width(1.5));
            plot_ui.line(Line::new(closed).name("Otherwise closed").color(colors[2]).width(1.5));
        });
}

// ---------------------------------------------------------------------------
// Analysis tab: top-10 ranking bar charts
// ---------------------------------------------------------------------------

pub fn analysis_tab(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        empty_placeholder(ui);
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Country & Origin Insights");
            ui.add_space(8.0);

            ranking_chart(
                ui,
                "top_countries",
                "Top 10 Countries by Applications",
                aggregate::top_countries(dataset, &state.visible_indices),
            );
            ui.add_space(12.0);
            ranking_chart(
                ui,
                "top_origins",
                "Top 10 Origins by Applications",
                aggregate::top_origins(dataset, &state.visible_indices),
            );
        });
}

fn ranking_chart(ui: &mut Ui, id: &str, title: &str, ranked: Vec<(String, f64)>) {
    let labels: Vec<String> = ranked.iter().map(|(name, _)| name.clone()).collect();
    let colors = generate_palette(ranked.len());

    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(i, (name, total))| {
            Bar::new(i as f64, *total)
                .name(bar_label(name, *total))
                .width(0.6)
                .fill(colors[i])
        })
        .collect();

    ui.strong(title);
    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(340.0)
        .x_axis_formatter(category_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn empty_placeholder(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a CSV to view the dashboard  (File → Open…)");
    });
}

/// Axis formatter mapping integral positions to categorical labels
/// (years, country names). Fractional grid marks stay unlabelled.
fn category_labels(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }
}

/// Label for a ranking bar: the group name plus its application count
/// with separators, shown on hover and in the legend.
fn bar_label(name: &str, total: f64) -> String {
    format!("{name}: {}", thousands(total as i64))
}

/// Format a count with thousands separators, e.g. 1234567 → "1,234,567".
fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
