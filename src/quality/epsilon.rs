//! Additive epsilon indicator.

use super::paired_dimension;
use crate::error::Result;

/// Additive epsilon indicator of `front` with respect to `reference_front`.
///
/// The smallest `eps` such that every reference point is weakly dominated
/// by some front point shifted by `-eps` in each objective. Zero or less
/// means `front` already weakly dominates the whole reference.
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
/// use u_pareto::quality::additive_epsilon;
///
/// let eps = additive_epsilon(&[vec![2.0, 3.0]], &[vec![1.0, 2.0]]).unwrap();
/// assert_eq!(eps, 1.0);
/// ```
pub fn additive_epsilon<P: AsRef<[f64]>, Q: AsRef<[f64]>>(
    front: &[P],
    reference_front: &[Q],
) -> Result<f64> {
    paired_dimension(front, reference_front)?;

    let eps = reference_front
        .iter()
        .map(|r| {
            front
                .iter()
                .map(|p| {
                    p.as_ref()
                        .iter()
                        .zip(r.as_ref())
                        .map(|(a, b)| a - b)
                        .fold(f64::NEG_INFINITY, f64::max)
                })
                .fold(f64::INFINITY, f64::min)
        })
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(eps)
}
