//! K-means fit via linfa.

use anyhow::{Context, Result, bail};
use linfa::traits::{Fit, Predict};
use linfa_clustering::KMeans;
use linfa_nn::distance::L2Dist;
use ndarray::{Array1, Array2};

use crate::data::model::Dataset;

/// Iteration cap for a single fit.
const MAX_ITERATIONS: u64 = 300;
/// Convergence tolerance on centroid movement.
const TOLERANCE: f64 = 1e-4;

/// One cluster's mean position, in template-column terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    /// Engine-assigned cluster id, matching the per-row labels.
    pub label: usize,
    /// Mean primary value of the cluster's rows.
    pub primary: f64,
    /// Mean secondary value, present only for 2-D fits.
    pub secondary: Option<f64>,
}

/// Raw engine output: one center per cluster, one label per row.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    pub centers: Vec<Center>,
    pub labels: Vec<usize>,
}

/// Fit k-means on the dataset's numeric column(s).
///
/// Features are the primary column alone, or primary + secondary when the
/// secondary column is present.  Degenerate inputs (fewer rows than
/// clusters) are rejected up front; engine-level failures propagate.
pub fn fit(dataset: &Dataset, num_clusters: usize) -> Result<KMeansFit> {
    if dataset.len() < num_clusters {
        bail!(
            "dataset has {} rows but {} clusters were requested",
            dataset.len(),
            num_clusters
        );
    }

    let dim = dataset.feature_dim();
    let mut values = Vec::with_capacity(dataset.len() * dim);
    for record in &dataset.records {
        values.push(record.primary);
        if let Some(secondary) = record.secondary {
            values.push(secondary);
        }
    }
    let features = Array2::from_shape_vec((dataset.len(), dim), values)
        .context("building feature matrix")?;

    // Dummy targets; k-means is unsupervised.
    let targets: Array1<usize> = Array1::zeros(dataset.len());
    let observations = linfa::Dataset::new(features, targets);

    let model = KMeans::params_with(num_clusters, rand::thread_rng(), L2Dist)
        .max_n_iterations(MAX_ITERATIONS)
        .tolerance(TOLERANCE)
        .fit(&observations)
        .context("k-means fit failed")?;

    let labels = model.predict(observations.records());
    let centers = model
        .centroids()
        .outer_iter()
        .enumerate()
        .map(|(label, row)| Center {
            label,
            primary: row[0],
            secondary: (dim == 2).then(|| row[1]),
        })
        .collect();

    Ok(KMeansFit {
        centers,
        labels: labels.to_vec(),
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
    fn separates_two_obvious_groups() {
        let ds = one_dim(&[1.0, 1.1, 0.9, 100.0, 100.2, 99.8]);
        let result = fit(&ds, 2).unwrap();

        assert_eq!(result.centers.len(), 2);
        assert_eq!(result.labels.len(), 6);

        let low = result.labels[0];
        assert!(result.labels[..3].iter().all(|&l| l == low));
        assert!(result.labels[3..].iter().all(|&l| l != low));
    }

    #[test]
    fn centers_carry_both_dimensions_for_two_variable_data() {
        let mut ds = one_dim(&[1.0, 1.5, 40.0, 41.0]);
        ds.headers.push("2nd Variable".into());
        for (record, y) in ds.records.iter_mut().zip([2.0, 2.5, 80.0, 79.0]) {
            record.secondary = Some(y);
        }

        let result = fit(&ds, 2).unwrap();
        assert!(result.centers.iter().all(|c| c.secondary.is_some()));
    }

    #[test]
    fn rejects_more_clusters_than_rows() {
        let ds = one_dim(&[1.0, 2.0]);
        assert!(fit(&ds, 3).is_err());
    }
}
