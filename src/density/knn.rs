//! Distances in objective space and k-nearest-neighbor density.
//!
//! Every public helper checks that all vectors share one length and
//! reports [`ParetoError::DimensionMismatch`] otherwise.

use crate::error::{common_dimension, ParetoError, Result};

/// Euclidean distance between two objective vectors.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if the lengths differ.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ParetoError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(distance(a, b))
}

/// Distance between two vectors already known to have equal length.
fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Symmetric matrix of pairwise Euclidean distances.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if the points differ in length.
pub fn distance_matrix<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<Vec<f64>>> {
    common_dimension(points)?;
    let n = points.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = distance(points[i].as_ref(), points[j].as_ref());
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    Ok(matrix)
}

/// For every point, the ascending list of distances to all other points.
///
/// Used for SPEA2-style truncation: comparing these lists
/// lexicographically separates points whose nearest neighbors tie.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if the points differ in length.
pub fn sorted_neighbor_distances<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<Vec<f64>>> {
    let matrix = distance_matrix(points)?;
    Ok(matrix
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut neighbors: Vec<f64> = row
                .into_iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, d)| d)
                .collect();
            neighbors.sort_by(f64::total_cmp);
            neighbors
        })
        .collect())
}

/// Distance from every point to its k-th nearest neighbor.
///
/// A point with fewer than `k` neighbors uses its farthest neighbor; a
/// lone point scores `f64::INFINITY`. Smaller values mean more crowded.
///
/// # Errors
///
/// - [`ParetoError::InvalidConfiguration`] if `k == 0`
/// - [`ParetoError::DimensionMismatch`] if the points differ in length
///
/// # Example
///
/// ```
/// use u_pareto::density::kth_nearest_distances;
///
/// let points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![3.0, 0.0]];
/// assert_eq!(kth_nearest_distances(&points, 1).unwrap(), vec![1.0, 1.0, 2.0]);
/// assert_eq!(kth_nearest_distances(&points, 2).unwrap(), vec![3.0, 2.0, 3.0]);
/// ```
pub fn kth_nearest_distances<P: AsRef<[f64]>>(points: &[P], k: usize) -> Result<Vec<f64>> {
    if k == 0 {
        return Err(ParetoError::InvalidConfiguration(
            "k-nearest-neighbor k must be at least 1".into(),
        ));
    }
    Ok(sorted_neighbor_distances(points)?
        .into_iter()
        .map(|neighbors| {
            if neighbors.is_empty() {
                f64::INFINITY
            } else {
                neighbors[k.min(neighbors.len()) - 1]
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert!((euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(euclidean_distance(&[1.0], &[1.0]), Ok(0.0));
    }

    #[test]
    fn test_distance_matrix_symmetric() {
        let pts = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![6.0, 8.0]];
        let m = distance_matrix(&pts).unwrap();
        assert_eq!(m[0][0], 0.0);
        assert_eq!(m[0][1], m[1][0]);
        assert!((m[0][2] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sorted_neighbor_distances() {
        let pts = vec![vec![0.0], vec![4.0], vec![1.0]];
        let lists = sorted_neighbor_distances(&pts).unwrap();
        assert_eq!(lists[0], vec![1.0, 4.0]);
        assert_eq!(lists[1], vec![3.0, 4.0]);
        assert_eq!(lists[2], vec![1.0, 3.0]);
    }

    #[test]
    fn test_kth_nearest_single_point() {
        let pts = vec![vec![1.0, 1.0]];
        assert_eq!(kth_nearest_distances(&pts, 1).unwrap(), vec![f64::INFINITY]);
    }

    #[test]
    fn test_kth_nearest_k_exceeds_neighbors() {
        let pts = vec![vec![0.0], vec![2.0]];
        assert_eq!(kth_nearest_distances(&pts, 5).unwrap(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_kth_nearest_duplicates_are_zero() {
        let pts = vec![vec![1.0, 1.0], vec![1.0, 1.0], vec![5.0, 5.0]];
        let d = kth_nearest_distances(&pts, 1).unwrap();
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], 0.0);
        assert!(d[2] > 0.0);
    }

    // ---- Invalid input ----

    #[test]
    fn test_euclidean_length_mismatch() {
        assert_eq!(
            euclidean_distance(&[0.0, 0.0, 9.0], &[3.0, 4.0]),
            Err(ParetoError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_ragged_points_rejected() {
        let pts = vec![vec![0.0, 0.0], vec![1.0], vec![3.0, 0.0]];
        let mismatch = ParetoError::DimensionMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(distance_matrix(&pts), Err(mismatch.clone()));
        assert_eq!(sorted_neighbor_distances(&pts), Err(mismatch.clone()));
        assert_eq!(kth_nearest_distances(&pts, 1), Err(mismatch));
    }

    #[test]
    fn test_kth_nearest_zero_k_rejected() {
        let pts = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![3.0, 0.0]];
        assert!(matches!(
            kth_nearest_distances(&pts, 0),
            Err(ParetoError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_points() {
        let pts: Vec<Vec<f64>> = Vec::new();
        assert_eq!(kth_nearest_distances(&pts, 1), Ok(Vec::new()));
    }
}
