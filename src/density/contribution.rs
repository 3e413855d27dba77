//! Hypervolume contribution as a density score (SMS-EMOA style).

use crate::error::{ParetoError, Result};
use crate::hypervolume::{normalize_front, objective_bounds, Hypervolume};

/// Exclusive hypervolume of every point after normalizing the set onto
/// `[0, 1]` by its own bounds, with the reference point at `1 + offset`
/// in every objective.
///
/// The offset keeps boundary points' contributions above zero. Higher is
/// better. An empty set yields an empty vector.
///
/// # Errors
///
/// - [`ParetoError::InvalidConfiguration`] if `offset` is not positive and finite
/// - [`ParetoError::DimensionMismatch`] if objective lengths disagree
pub fn normalized_contributions<P: AsRef<[f64]>>(points: &[P], offset: f64) -> Result<Vec<f64>> {
    if !(offset > 0.0 && offset.is_finite()) {
        return Err(ParetoError::InvalidConfiguration(format!(
            "hypervolume offset must be positive and finite, got {offset}"
        )));
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let (minimum, maximum) = objective_bounds(points)?;
    let normalized = normalize_front(points, &minimum, &maximum)?;
    let indicator = Hypervolume::new(vec![1.0 + offset; minimum.len()])?;
    indicator.contributions(&normalized)
}
