use eframe::egui::Color32;

use clusterview::cluster::{self, Analysis, MAX_CLUSTERS, MIN_CLUSTERS};
use clusterview::data::model::Dataset;

use crate::color::cluster_palette;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Name of the loaded file, for the top bar.
    pub file_name: Option<String>,

    /// Requested cluster count (slider value).
    pub num_clusters: usize,

    /// Result of the latest clustering pass.
    pub analysis: Option<Analysis>,

    /// One color per cluster id.
    pub palette: Vec<Color32>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            file_name: None,
            num_clusters: MIN_CLUSTERS,
            analysis: None,
            palette: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and cluster it right away.
    pub fn set_dataset(&mut self, file_name: String, dataset: Dataset) {
        self.file_name = Some(file_name);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.reanalyze();
    }

    /// Re-run clustering and boundary derivation with the current settings.
    ///
    /// No dataset loaded is a wait state, not an error: the analysis is
    /// simply cleared until a file arrives.
    pub fn reanalyze(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.analysis = None;
            self.palette.clear();
            return;
        };

        match cluster::analyze(dataset, self.num_clusters) {
            Ok(analysis) => {
                log::info!(
                    "clustered {} rows into {} groups",
                    dataset.len(),
                    analysis.centers.len()
                );
                self.palette = cluster_palette(analysis.centers.len());
                self.analysis = Some(analysis);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("clustering failed: {e:#}");
                self.analysis = None;
                self.palette.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Slider callback: clamp and re-cluster.
    pub fn set_num_clusters(&mut self, n: usize) {
        self.num_clusters = n.clamp(MIN_CLUSTERS, MAX_CLUSTERS);
        self.reanalyze();
    }

    /// Color for a cluster id, with a fallback for ids past the palette.
    pub fn cluster_color(&self, label: usize) -> Color32 {
        self.palette
            .get(label)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}
