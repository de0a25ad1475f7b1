use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::params::Selection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – threshold controls
// ---------------------------------------------------------------------------

/// Render the left panel with the six threshold controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Screening thresholds");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for ctl in state.params.controls_mut() {
                ui.strong(ctl.title);

                egui::ComboBox::from_id_salt(ctl.field)
                    .selected_text(ctl.selected_text().to_string())
                    .width(ui.available_width() * 0.9)
                    .show_ui(ui, |ui: &mut Ui| {
                        for (i, (name, _)) in ctl.presets.iter().enumerate() {
                            if ui
                                .selectable_label(ctl.selection == Selection::Preset(i), *name)
                                .clicked()
                            {
                                ctl.selection = Selection::Preset(i);
                                changed = true;
                            }
                        }
                        if ui
                            .selectable_label(ctl.is_custom(), "Type a value")
                            .clicked()
                        {
                            ctl.selection = Selection::Custom;
                            changed = true;
                        }
                    });

                // The free-form input is only visible in custom mode.
                if ctl.is_custom() {
                    if ui.text_edit_singleline(&mut ctl.custom_text).changed() {
                        changed = true;
                    }
                }

                ui.add_space(6.0);
            }

            if let Some(msg) = &state.status_message {
                ui.separator();
                ui.label(RichText::new(msg).color(Color32::RED));
            }

            ui.separator();
            ui.label(
                RichText::new(
                    "Values displayed here are to be considered with caution: this is \
                     a screening approach, further theoretical and experimental \
                     studies are encouraged.",
                )
                .small()
                .weak(),
            );
        });

    // Recompute the subset only after all six controls have been read.
    if changed {
        state.refilter();
    }
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
            ui.separator();
            let has_data = state.dataset.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export filtered CSV…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_data, egui::Button::new("Export filtered JSON…"))
                .clicked()
            {
                export_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} of {} candidates",
                state.visible_indices.len(),
                ds.len()
            ));
        } else {
            ui.label("No dataset loaded");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open COF dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} candidates from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

enum ExportFormat {
    Csv,
    Json,
}

fn export_dialog(state: &mut AppState, format: ExportFormat) {
    let (name, filter, exts): (&str, &str, &[&str]) = match format {
        ExportFormat::Csv => ("filtered_cofs.csv", "CSV", &["csv"]),
        ExportFormat::Json => ("filtered_cofs.json", "JSON", &["json"]),
    };

    let file = rfd::FileDialog::new()
        .set_title("Save filtered subset")
        .set_file_name(name)
        .add_filter(filter, exts)
        .save_file();

    if let Some(path) = file {
        let records = state.filtered_records();
        let result = match format {
            ExportFormat::Csv => {
                crate::data::export::save_csv(&path, &records).map_err(anyhow::Error::from)
            }
            ExportFormat::Json => {
                crate::data::export::save_json(&path, &records).map_err(anyhow::Error::from)
            }
        };
        match result {
            Ok(()) => {
                log::info!("Exported {} candidates to {}", records.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}
