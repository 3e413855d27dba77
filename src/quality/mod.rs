//! Quality indicators against a reference front.
//!
//! All indicators assume minimization and compare an approximation `front`
//! with a `reference_front` (usually the true Pareto front or the best known
//! approximation). Lower is better for every indicator here.
//!
//! # Functions
//!
//! - [`additive_epsilon`]: Smallest shift making `front` weakly dominate the reference
//! - [`generational_distance`]: How far `front` lies from the reference
//! - [`inverted_generational_distance`]: How well `front` covers the reference
//!
//! # References
//!
//! - Zitzler et al. (2003), "Performance assessment of multiobjective
//!   optimizers: an analysis and review"
//! - Van Veldhuizen & Lamont (1998), "Evolutionary computation and
//!   convergence to a Pareto front"

mod distance;
mod epsilon;

pub use distance::{generational_distance, inverted_generational_distance};
pub use epsilon::additive_epsilon;

use crate::error::{common_dimension, ParetoError, Result};

/// Validates both fronts and returns their shared objective count.
fn paired_dimension<P: AsRef<[f64]>, Q: AsRef<[f64]>>(
    front: &[P],
    reference_front: &[Q],
) -> Result<usize> {
    let expected =
        common_dimension(reference_front)?.ok_or(ParetoError::EmptyInput("reference front"))?;
    let actual = common_dimension(front)?.ok_or(ParetoError::EmptyInput("front"))?;
    if actual != expected {
        return Err(ParetoError::DimensionMismatch { expected, actual });
    }
    Ok(expected)
}
