//! Crowding distance (NSGA-II).

use crate::error::{common_dimension, Result};

/// Crowding distance of every member of one front.
///
/// Meant to be called per front: mixing ranks makes the boundary members
/// of an inner front look artificially isolated. For each objective the
/// members are ordered by value (ties keep input order); the first and
/// last of that order score `f64::INFINITY`, and every other member adds
/// the gap between its two neighbors divided by the objective's range.
/// A front of at most two members is all boundary.
///
/// An objective with zero or non-finite range adds nothing, so finite
/// input never yields NaN. Scores are not comparable across fronts.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
/// if the vectors differ in length.
///
/// # Example
///
/// ```
/// use u_pareto::density::crowding_distance;
///
/// let front = vec![vec![0.0, 4.0], vec![1.0, 2.0], vec![3.0, 1.0], vec![4.0, 0.0]];
/// let scores = crowding_distance(&front).unwrap();
///
/// assert!(scores[0].is_infinite() && scores[3].is_infinite());
/// // (3 - 0) / 4 + (4 - 1) / 4
/// assert_eq!(scores[1], 1.5);
/// // (4 - 1) / 4 + (2 - 0) / 4
/// assert_eq!(scores[2], 1.25);
/// ```
pub fn crowding_distance<P: AsRef<[f64]>>(objectives: &[P]) -> Result<Vec<f64>> {
    common_dimension(objectives)?;
    let n = objectives.len();
    if n <= 2 {
        return Ok(vec![f64::INFINITY; n]);
    }

    let value = |i: usize, obj: usize| objectives[i].as_ref()[obj];
    let m = objectives[0].as_ref().len();
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        // Sort indices by this objective
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            value(a, obj_idx)
                .partial_cmp(&value(b, obj_idx))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Boundary solutions get infinity
        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        // Objective range for normalization
        let range = value(indices[n - 1], obj_idx) - value(indices[0], obj_idx);

        if range > 0.0 && range.is_finite() {
            for i in 1..(n - 1) {
                let prev = value(indices[i - 1], obj_idx);
                let next = value(indices[i + 1], obj_idx);
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    Ok(distances)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParetoError;
    use proptest::prelude::*;

    #[test]
    fn test_crowding_empty() {
        let objs: Vec<Vec<f64>> = Vec::new();
        assert!(crowding_distance(&objs).unwrap().is_empty());
    }

    #[test]
    fn test_crowding_single() {
        let objs = vec![vec![1.0, 2.0]];
        let dist = crowding_distance(&objs).unwrap();
        assert_eq!(dist.len(), 1);
        assert!(dist[0].is_infinite());
    }

    #[test]
    fn test_crowding_two() {
        let objs = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        let dist = crowding_distance(&objs).unwrap();
        assert!(dist.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_three_points() {
        let objs = vec![
            vec![1.0, 5.0], // boundary
            vec![3.0, 3.0], // interior
            vec![5.0, 1.0], // boundary
        ];
        let dist = crowding_distance(&objs).unwrap();
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        // (5 - 1) / 4 per objective
        assert!((dist[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        let objs = vec![
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let dist = crowding_distance(&objs).unwrap();

        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());

        // Interior points should have equal crowding distance
        let d1 = dist[1];
        let d2 = dist[2];
        let d3 = dist[3];
        assert!((d1 - d2).abs() < 1e-10, "expected equal: {d1} vs {d2}");
        assert!((d2 - d3).abs() < 1e-10, "expected equal: {d2} vs {d3}");
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        // One objective has zero range: no division by zero
        let objs = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let dist = crowding_distance(&objs).unwrap();
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        assert!((dist[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowding_accepts_slices() {
        let a = [1.0, 4.0];
        let b = [2.0, 2.0];
        let c = [4.0, 1.0];
        let objs: Vec<&[f64]> = vec![&a, &b, &c];
        let dist = crowding_distance(&objs).unwrap();
        assert!(dist[1].is_finite());
    }

    #[test]
    fn test_crowding_ragged_front_rejected() {
        let objs = vec![vec![1.0, 5.0], vec![3.0], vec![5.0, 1.0]];
        assert_eq!(
            crowding_distance(&objs),
            Err(ParetoError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_crowding_ragged_small_front_rejected() {
        let objs = vec![vec![1.0, 5.0], vec![3.0, 3.0, 3.0]];
        assert!(crowding_distance(&objs).is_err());
    }

    proptest! {
        #[test]
        fn prop_never_nan(objs in prop::collection::vec(
            prop::collection::vec((0u8..3).prop_map(f64::from), 2), 0..20)) {
            let dist = crowding_distance(&objs).unwrap();
            prop_assert_eq!(dist.len(), objs.len());
            prop_assert!(dist.iter().all(|d| !d.is_nan() && *d >= 0.0));
            if objs.len() <= 2 {
                prop_assert!(dist.iter().all(|d| d.is_infinite()));
            } else {
                // at most two boundary slots per objective ordering
                let inf = dist.iter().filter(|d| d.is_infinite()).count();
                prop_assert!((2..=4).contains(&inf));
            }
        }
    }
}
