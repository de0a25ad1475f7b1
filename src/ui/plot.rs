use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, LineStyle, MarkerShape, Plot, PlotPoints, Points, VLine};

use crate::state::AppState;

const HOMO_COLOR: Color32 = Color32::RED;
const LUMO_COLOR: Color32 = Color32::BLUE;
const OXIDATION_COLOR: Color32 = Color32::DARK_GREEN;
const REDUCTION_COLOR: Color32 = Color32::from_rgb(128, 0, 128);
const BAND_GAP_COLOR: Color32 = Color32::DARK_GRAY;

// ---------------------------------------------------------------------------
// Screening scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter of the filtered subset: HOMO and LUMO alignments
/// against the adjusted band gap, with dashed reference lines for the
/// active redox levels and band gap ceiling.
pub fn screening_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to start screening  (File → Open…)");
            });
            return;
        }
    };

    ui.heading(state.plot_title());

    let homo: PlotPoints = state
        .visible_indices
        .iter()
        .map(|&idx| {
            let rec = &dataset.records[idx];
            [rec.band_gap, rec.homo_align]
        })
        .collect();
    let lumo: PlotPoints = state
        .visible_indices
        .iter()
        .map(|&idx| {
            let rec = &dataset.records[idx];
            [rec.band_gap, rec.lumo_align]
        })
        .collect();

    let t = &state.thresholds;

    Plot::new("screening_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Adjusted Band Gap [eV]")
        .y_axis_label("Adjusted IP/EA energies [eV]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(homo)
                    .name("HOMO")
                    .color(HOMO_COLOR)
                    .shape(MarkerShape::Circle)
                    .radius(4.0),
            );
            plot_ui.points(
                Points::new(lumo)
                    .name("LUMO")
                    .color(LUMO_COLOR)
                    .shape(MarkerShape::Circle)
                    .radius(4.0),
            );

            plot_ui.hline(
                HLine::new(t.oxidation)
                    .name("Oxidation level")
                    .color(OXIDATION_COLOR)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(2.0),
            );
            plot_ui.hline(
                HLine::new(t.reduction)
                    .name("Reduction level")
                    .color(REDUCTION_COLOR)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(2.0),
            );
            plot_ui.vline(
                VLine::new(t.band_gap_max)
                    .name("Band gap limit")
                    .color(BAND_GAP_COLOR)
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(2.0),
            );
        });
}
