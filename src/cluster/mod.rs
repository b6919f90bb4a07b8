/// Clustering layer: engine wrapper, boundary derivation, orchestration.
///
/// ```text
///   Dataset ──► engine (linfa k-means) ──► centers + labels
///                                             │
///                                             ▼ sort by primary value
///                                          boundary ──► k-1 midpoints
/// ```
pub mod boundary;
pub mod engine;

use anyhow::{Result, bail};

use crate::data::model::Dataset;

pub use engine::{Center, KMeansFit};

/// Smallest selectable cluster count.
pub const MIN_CLUSTERS: usize = 2;
/// Largest selectable cluster count.
pub const MAX_CLUSTERS: usize = 20;

/// Everything derived from one clustering pass.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Cluster centers sorted ascending by primary value.
    pub centers: Vec<Center>,
    /// Midpoints between adjacent sorted centers; always
    /// `centers.len() - 1` values, ascending.
    pub boundaries: Vec<f64>,
    /// Engine-assigned cluster id per input row, in row order.
    pub labels: Vec<usize>,
}

/// Cluster the dataset and derive the boundaries between the groups.
pub fn analyze(dataset: &Dataset, num_clusters: usize) -> Result<Analysis> {
    if !(MIN_CLUSTERS..=MAX_CLUSTERS).contains(&num_clusters) {
        bail!(
            "cluster count must be between {MIN_CLUSTERS} and {MAX_CLUSTERS}, got {num_clusters}"
        );
    }

    let fit = engine::fit(dataset, num_clusters)?;

    let mut centers = fit.centers;
    centers.sort_by(|a, b| a.primary.total_cmp(&b.primary));

    // Boundaries run along the primary axis only, even for 2-D fits.
    let primaries: Vec<f64> = centers.iter().map(|c| c.primary).collect();
    let boundaries = boundary::derive_boundaries(&primaries)?;

    Ok(Analysis {
        centers,
        boundaries,
        labels: fit.labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn one_dim(values: &[f64]) -> Dataset {
        Dataset {
            headers: vec!["Item".into(), "1st Variable".into()],
            records: values
                .iter()
                .enumerate()
                .map(|(i, &v)| Record {
                    name: format!("r{i}"),
                    primary: v,
                    secondary: None,
                })
                .collect(),
        }
    }

    #[test]
    fn centers_come_out_sorted_with_boundaries_between() {
        let ds = one_dim(&[0.0, 0.1, 10.0, 10.1, 50.0, 50.1]);
        let analysis = analyze(&ds, 3).unwrap();

        assert_eq!(analysis.centers.len(), 3);
        assert_eq!(analysis.boundaries.len(), 2);
        assert_eq!(analysis.labels.len(), 6);

        for pair in analysis.centers.windows(2) {
            assert!(pair[0].primary <= pair[1].primary);
        }
        for (i, b) in analysis.boundaries.iter().enumerate() {
            assert!(analysis.centers[i].primary <= *b);
            assert!(*b <= analysis.centers[i + 1].primary);
        }
    }

    #[test]
    fn rejects_out_of_range_cluster_count() {
        let ds = one_dim(&[1.0, 2.0, 3.0]);
        assert!(analyze(&ds, 1).is_err());
        assert!(analyze(&ds, 21).is_err());
    }
}
