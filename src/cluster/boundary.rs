//! Centroid-to-boundary derivation.

use anyhow::{Result, bail, ensure};

/// Midpoint boundaries between adjacent cluster centers.
///
/// Sorts the centers ascending and emits the arithmetic mean of every
/// adjacent pair, so `k` centers yield `k - 1` boundaries in ascending
/// order.  The boundary can be read as the threshold where a value stops
/// belonging to one cluster and starts belonging to the next.
///
/// Duplicate centers produce a zero-width gap whose boundary equals the
/// duplicated value.  Fewer than two centers is a caller bug (the UI slider
/// floor is 2) and is rejected explicitly, as are non-finite centers.
pub fn derive_boundaries(centers: &[f64]) -> Result<Vec<f64>> {
    ensure!(
        centers.len() >= 2,
        "boundary derivation needs at least 2 centers, got {}",
        centers.len()
    );
    if let Some(bad) = centers.iter().find(|c| !c.is_finite()) {
        bail!("non-finite cluster center: {bad}");
    }

    let mut sorted = centers.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(sorted
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_centers() {
        let bounds = derive_boundaries(&[1.0, 3.0, 5.0]).unwrap();
        assert_eq!(bounds, vec![2.0, 4.0]);
    }

    #[test]
    fn two_centers() {
        assert_eq!(derive_boundaries(&[10.0, 20.0]).unwrap(), vec![15.0]);
    }

    #[test]
    fn duplicate_centers_give_zero_width_gap() {
        assert_eq!(derive_boundaries(&[2.0, 2.0, 7.0]).unwrap(), vec![2.0, 4.5]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let sorted = derive_boundaries(&[1.0, 3.0, 5.0]).unwrap();
        let shuffled = derive_boundaries(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn boundaries_stay_between_their_source_centers() {
        let centers = [4.2, -1.5, 0.0, 19.75, 4.2];
        let mut sorted = centers.to_vec();
        sorted.sort_by(f64::total_cmp);

        let bounds = derive_boundaries(&centers).unwrap();
        assert_eq!(bounds.len(), centers.len() - 1);
        for (i, b) in bounds.iter().enumerate() {
            assert!(sorted[i] <= *b && *b <= sorted[i + 1]);
        }
        assert!(bounds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn rejects_fewer_than_two_centers() {
        assert!(derive_boundaries(&[]).is_err());
        assert!(derive_boundaries(&[3.0]).is_err());
    }

    #[test]
    fn rejects_non_finite_centers() {
        assert!(derive_boundaries(&[1.0, f64::NAN]).is_err());
        assert!(derive_boundaries(&[1.0, f64::INFINITY]).is_err());
    }
}
