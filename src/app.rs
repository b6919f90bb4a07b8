use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ClusterViewApp {
    pub state: AppState,
}

impl eframe::App for ClusterViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: slider + result tables ----
        egui::SidePanel::left("results_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cluster plot over the labeled row table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a cluster template to begin  (File → Open…)");
                });
                return;
            }

            let plot_height = ui.available_height() * 0.55;
            plot::cluster_plot(ui, &self.state, plot_height);
            ui.separator();
            tables::labeled_rows(ui, &self.state);
        });
    }
}
