use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CofScreenerApp {
    pub state: AppState,
}

impl CofScreenerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl Default for CofScreenerApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for CofScreenerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: threshold controls ----
        egui::SidePanel::left("threshold_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered-subset table ----
        egui::TopBottomPanel::bottom("results_table")
            .default_height(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::results_table(ui, &self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::screening_plot(ui, &self.state);
        });
    }
}
