use eframe::egui::{self, Color32, RichText, Slider, Ui};

use clusterview::cluster::{MAX_CLUSTERS, MIN_CLUSTERS};

use crate::state::AppState;

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
            let can_save = state.analysis.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new("Save results…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(name), Some(ds)) = (&state.file_name, &state.dataset) {
            let variables = if ds.has_secondary() { 2 } else { 1 };
            ui.label(format!("{name}: {} rows, {variables} variable(s)", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – cluster-count slider and result tables
// ---------------------------------------------------------------------------

/// Render the left results panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Clustering");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let mut n = state.num_clusters;
    if ui
        .add(Slider::new(&mut n, MIN_CLUSTERS..=MAX_CLUSTERS).text("clusters"))
        .changed()
    {
        state.set_num_clusters(n);
    }
    ui.small("Most common is 2 to 4; consider extra clusters for outliers.");
    ui.add_space(8.0);

    if state.analysis.is_none() {
        return;
    }

    ui.strong("Centroids");
    super::tables::centroid_table(ui, state);
    ui.add_space(8.0);

    ui.strong("Cluster Boundaries");
    ui.small("Boundary values are usually more useful than centroid values.");
    super::tables::boundary_table(ui, state);
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open cluster template")
        .add_filter("Supported files", &["xlsx", "xlsm", "csv"])
        .add_filter("Excel", &["xlsx", "xlsm"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match clusterview::load_file(&path) {
            Ok(dataset) => {
                log::info!("loaded {} rows from {}", dataset.len(), path.display());
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("dataset")
                    .to_string();
                state.set_dataset(name, dataset);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn save_file_dialog(state: &mut AppState) {
    let (Some(dataset), Some(analysis)) = (&state.dataset, &state.analysis) else {
        return;
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Save clustered dataset")
        .set_file_name("clustered_dataset.xlsx")
        .add_filter("Excel", &["xlsx"])
        .save_file()
    else {
        return;
    };

    let result = clusterview::write_workbook(dataset, &analysis.labels)
        .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));

    match result {
        Ok(()) => {
            log::info!("saved results to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("failed to save results: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
