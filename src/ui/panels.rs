use eframe::egui::{self, ScrollArea, Ui};

use crate::data::filter::Selection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filters and export
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone the option lists so we can mutate selector state below.
    let (years, countries, origins, procedures) = match &state.dataset {
        Some(ds) => (
            ds.years.clone(),
            ds.countries.clone(),
            ds.origins.clone(),
            ds.procedures.clone(),
        ),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let mut changed = false;
            changed |= selector(ui, "Year", &mut state.filters.year, &years);
            changed |= selector(ui, "Country of Asylum", &mut state.filters.country, &countries);
            changed |= selector(ui, "Origin", &mut state.filters.origin, &origins);
            changed |= selector(ui, "Procedure Type", &mut state.filters.procedure, &procedures);

            // Any selector change recomputes the visible set; every chart
            // and KPI reads from it on the next repaint.
            if changed {
                state.refilter();
            }

            ui.separator();
            if ui.button("Export Data").clicked() {
                state.export_filtered();
            }
        });
}

/// One combo box offering "All" plus the column's sorted distinct values.
/// Returns true when the selection changed.
fn selector(ui: &mut Ui, name: &str, selection: &mut Selection, options: &[String]) -> bool {
    let mut changed = false;

    ui.strong(name);
    egui::ComboBox::from_id_salt(name)
        .selected_text(selection.label().to_string())
        .width(ui.available_width() * 0.95)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(*selection == Selection::All, "All")
                .clicked()
            {
                *selection = Selection::All;
                changed = true;
            }
            for opt in options {
                let is_selected = matches!(selection, Selection::Value(v) if v == opt);
                if ui.selectable_label(is_selected, opt).clicked() {
                    *selection = Selection::Value(opt.clone());
                    changed = true;
                }
            }
        });
    ui.add_space(6.0);

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    // Synchronous dialog: the UI thread waits here until the user picks
    // a file or cancels.
    let file = rfd::FileDialog::new()
        .set_title("Open asylum statistics")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records ({} years, {} countries)",
                    dataset.len(),
                    dataset.years.len(),
                    dataset.countries.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
