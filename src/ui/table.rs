use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const HEADERS: &[&str] = &[
    "CURATED COF ID",
    "Adjusted Band Gap [eV]",
    "HOMO [eV]",
    "LUMO [eV]",
    "m* electron [m/me]",
    "m* hole [m/me]",
    "Charge recomb. descript.",
];

// ---------------------------------------------------------------------------
// Filtered-subset table (bottom panel)
// ---------------------------------------------------------------------------

pub fn results_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut builder = TableBuilder::new(ui).striped(true);
    for _ in HEADERS {
        builder = builder.column(Column::auto().resizable(true));
    }

    builder
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(*title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.label);
                });
                for value in [
                    rec.band_gap,
                    rec.homo_align,
                    rec.lumo_align,
                    rec.electron_mass,
                    rec.hole_mass,
                    rec.spatial_overlap,
                ] {
                    row.col(|ui| {
                        ui.label(format!("{value:.2}"));
                    });
                }
            });
        });
}
