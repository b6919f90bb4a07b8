use eframe::egui::{Color32, Ui};
use egui_plot::{Plot, PlotPoints, Points, VLine};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cluster scatter (central panel)
// ---------------------------------------------------------------------------

/// Scatter of the rows colored by cluster, with the derived boundaries as
/// vertical lines.  Secondary variable on the y axis when present, row
/// index otherwise.
pub fn cluster_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let Some(analysis) = &state.analysis else {
        return;
    };

    let x_label = dataset.headers.get(1).cloned().unwrap_or_default();
    let y_label = if dataset.has_secondary() {
        dataset.headers.get(2).cloned().unwrap_or_default()
    } else {
        "row".to_string()
    };

    Plot::new("cluster_plot")
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            // One series per cluster id so the legend groups them.
            for cluster in 0..analysis.centers.len() {
                let points: PlotPoints = dataset
                    .records
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| analysis.labels[*i] == cluster)
                    .map(|(i, r)| [r.primary, r.secondary.unwrap_or(i as f64)])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(format!("cluster {cluster}"))
                        .color(state.cluster_color(cluster))
                        .radius(3.0),
                );
            }

            for &boundary in &analysis.boundaries {
                plot_ui.vline(VLine::new(boundary).color(Color32::GRAY).width(1.0));
            }
        });
}
