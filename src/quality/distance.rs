//! Distance-based convergence indicators.

use super::paired_dimension;
use crate::density::euclidean_distance;
use crate::error::Result;

/// Generational distance of `front` to `reference_front`.
///
/// `sqrt(sum d_i^2) / n`, where `d_i` is the Euclidean distance from the
/// i-th front point to its nearest reference point and `n` the front size.
///
/// # Errors
///
/// - [`ParetoError::EmptyInput`](crate::ParetoError::EmptyInput) if either front is empty
/// - [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
///   if objective lengths disagree
///
/// # Example
///
/// ```
/// use u_pareto::quality::generational_distance;
///
/// let reference = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
/// let front = vec![vec![0.0, 2.0], vec![1.0, 0.0]];
/// assert_eq!(generational_distance(&front, &reference).unwrap(), 0.5);
/// ```
pub fn generational_distance<P: AsRef<[f64]>, Q: AsRef<[f64]>>(
    front: &[P],
    reference_front: &[Q],
) -> Result<f64> {
    paired_dimension(front, reference_front)?;
    mean_root_square(front, reference_front)
}

/// Inverted generational distance of `front` with respect to
/// `reference_front`.
///
/// Generational distance with the roles swapped: every reference point is
/// measured against its nearest front point, so a front that misses part of
/// the reference scores badly even if all its points are optimal.
///
/// # Errors
///
/// Same as [`generational_distance`].
pub fn inverted_generational_distance<P: AsRef<[f64]>, Q: AsRef<[f64]>>(
    front: &[P],
    reference_front: &[Q],
) -> Result<f64> {
    paired_dimension(front, reference_front)?;
    mean_root_square(reference_front, front)
}

fn mean_root_square<P: AsRef<[f64]>, Q: AsRef<[f64]>>(from: &[P], to: &[Q]) -> Result<f64> {
    let mut sum = 0.0;
    for p in from {
        let mut nearest = f64::INFINITY;
        for q in to {
            nearest = nearest.min(euclidean_distance(p.as_ref(), q.as_ref())?);
        }
        sum += nearest * nearest;
    }
    Ok(sum.sqrt() / from.len() as f64)
}
