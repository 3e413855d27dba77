//! Reference-point derivation and front normalization.

use crate::error::{common_dimension, ParetoError, Result};

/// Per-objective minimum and maximum over `points`.
///
/// # Errors
///
/// - [`ParetoError::EmptyInput`] if `points` is empty
/// - [`ParetoError::DimensionMismatch`] if vector lengths disagree
pub fn objective_bounds<P: AsRef<[f64]>>(points: &[P]) -> Result<(Vec<f64>, Vec<f64>)> {
    let m = common_dimension(points)?.ok_or(ParetoError::EmptyInput("front"))?;

    let mut minimum = vec![f64::INFINITY; m];
    let mut maximum = vec![f64::NEG_INFINITY; m];
    for p in points {
        for (i, &v) in p.as_ref().iter().enumerate() {
            minimum[i] = minimum[i].min(v);
            maximum[i] = maximum[i].max(v);
        }
    }
    Ok((minimum, maximum))
}

/// Maps every objective onto `[0, 1]` using the given bounds.
///
/// Objectives whose range is zero map to `0.0`.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if a point or the bounds disagree in length.
pub fn normalize_front<P: AsRef<[f64]>>(
    points: &[P],
    minimum: &[f64],
    maximum: &[f64],
) -> Result<Vec<Vec<f64>>> {
    if minimum.len() != maximum.len() {
        return Err(ParetoError::DimensionMismatch {
            expected: minimum.len(),
            actual: maximum.len(),
        });
    }

    points
        .iter()
        .map(|p| {
            let p = p.as_ref();
            if p.len() != minimum.len() {
                return Err(ParetoError::DimensionMismatch {
                    expected: minimum.len(),
                    actual: p.len(),
                });
            }
            Ok(p.iter()
                .zip(minimum.iter().zip(maximum))
                .map(|(&v, (&lo, &hi))| {
                    let range = hi - lo;
                    if range > 0.0 {
                        (v - lo) / range
                    } else {
                        0.0
                    }
                })
                .collect())
        })
        .collect()
}

/// Reference point derived from a known front: per-objective maximum plus
/// `margin`, so that every real solution strictly dominates it.
///
/// # Errors
///
/// - [`ParetoError::InvalidConfiguration`] if `margin` is not positive and finite
/// - [`ParetoError::EmptyInput`] if `front` is empty
/// - [`ParetoError::DimensionMismatch`] if vector lengths disagree
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::reference_point;
///
/// let front = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
/// assert_eq!(reference_point(&front, 0.1).unwrap(), vec![1.1, 1.1]);
/// ```
pub fn reference_point<P: AsRef<[f64]>>(front: &[P], margin: f64) -> Result<Vec<f64>> {
    if !(margin > 0.0 && margin.is_finite()) {
        return Err(ParetoError::InvalidConfiguration(format!(
            "reference point margin must be positive and finite, got {margin}"
        )));
    }
    let (_, maximum) = objective_bounds(front)?;
    Ok(maximum.into_iter().map(|v| v + margin).collect())
}
