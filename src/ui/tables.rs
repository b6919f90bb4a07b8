use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Result tables – two-decimal display, full precision underneath
// ---------------------------------------------------------------------------

/// Sorted cluster centers, colored like the plot.
pub fn centroid_table(ui: &mut Ui, state: &AppState) {
    let Some(analysis) = &state.analysis else {
        return;
    };
    let has_secondary = analysis.centers.iter().any(|c| c.secondary.is_some());

    ui.push_id("centroid_table", |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::remainder());
        if has_secondary {
            builder = builder.column(Column::remainder());
        }

        builder
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Cluster");
                });
                header.col(|ui| {
                    ui.strong("Average");
                });
                if has_secondary {
                    header.col(|ui| {
                        ui.strong("Average (2nd)");
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, analysis.centers.len(), |mut row| {
                    let center = analysis.centers[row.index()];
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("● {}", center.label))
                                .color(state.cluster_color(center.label)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", center.primary));
                    });
                    if has_secondary {
                        row.col(|ui| {
                            let text = center
                                .secondary
                                .map_or_else(String::new, |v| format!("{v:.2}"));
                            ui.label(text);
                        });
                    }
                });
            });
    });
}

/// Midpoint boundaries between adjacent clusters, ascending.
pub fn boundary_table(ui: &mut Ui, state: &AppState) {
    let Some(analysis) = &state.analysis else {
        return;
    };

    ui.push_id("boundary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Boundary");
                });
            })
            .body(|body| {
                body.rows(18.0, analysis.boundaries.len(), |mut row| {
                    let boundary = analysis.boundaries[row.index()];
                    row.col(|ui| {
                        ui.label(format!("{boundary:.2}"));
                    });
                });
            });
    });
}

/// Every input row with its assigned cluster, in original order.
pub fn labeled_rows(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(analysis)) = (&state.dataset, &state.analysis) else {
        return;
    };
    let has_secondary = dataset.has_secondary();

    ui.push_id("labeled_rows", |ui: &mut Ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder());
        if has_secondary {
            builder = builder.column(Column::remainder());
        }
        builder = builder.column(Column::auto().at_least(60.0));

        builder
            .header(18.0, |mut header| {
                for title in &dataset.headers {
                    header.col(|ui| {
                        ui.strong(title.as_str());
                    });
                }
                header.col(|ui| {
                    ui.strong("Cluster");
                });
            })
            .body(|body| {
                body.rows(18.0, dataset.len(), |mut row| {
                    let i = row.index();
                    let record = &dataset.records[i];
                    let label = analysis.labels[i];

                    row.col(|ui| {
                        ui.label(&record.name);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", record.primary));
                    });
                    if has_secondary {
                        row.col(|ui| {
                            let text = record
                                .secondary
                                .map_or_else(String::new, |v| format!("{v:.2}"));
                            ui.label(text);
                        });
                    }
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("● {label}"))
                                .color(state.cluster_color(label)),
                        );
                    });
                });
            });
    });
}
