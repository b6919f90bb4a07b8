//! ClusterView: an interactive k-means cluster tool over spreadsheet templates.
//!
//! The library half is a pure pipeline: parse template bytes into a
//! [`Dataset`], fit k-means, derive the midpoint boundaries between the
//! sorted cluster centers, and serialize a labeled result workbook.  The
//! binary half is an egui front-end over these functions; it holds no state
//! the pipeline depends on.

pub mod cluster;
pub mod data;
pub mod export;

// Re-export public items for easier access
pub use cluster::{Analysis, Center, MAX_CLUSTERS, MIN_CLUSTERS, analyze};
pub use data::loader::{load_bytes, load_file};
pub use data::model::{Dataset, Record};
pub use export::write_workbook;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;

/// Output of one full tool invocation.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The parsed input table.
    pub dataset: Dataset,
    /// Centers, boundaries, and per-row labels.
    pub analysis: Analysis,
    /// Result workbook bytes, ready to be written to disk.
    pub workbook: Vec<u8>,
}

/// One invocation end to end: template bytes plus a cluster count in,
/// centers, boundaries, labels, and result workbook bytes out.
pub fn run_pipeline(file_name: &str, bytes: &[u8], num_clusters: usize) -> Result<PipelineOutput> {
    let dataset = load_bytes(file_name, bytes)?;
    let analysis = analyze(&dataset, num_clusters)?;
    let workbook = write_workbook(&dataset, &analysis.labels)?;
    Ok(PipelineOutput {
        dataset,
        analysis,
        workbook,
    })
}
