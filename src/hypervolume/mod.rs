//! Hypervolume quality indicator.
//!
//! The hypervolume of a front is the volume of objective space it dominates,
//! bounded by a reference point that every point of interest dominates.
//! Higher is better. It is the only unary indicator known to be strictly
//! Pareto-compliant, which is why archives use per-point contributions to
//! decide what to evict.
//!
//! # Key Types
//!
//! - [`Hypervolume`]: Indicator bound to a reference point
//!
//! # Utilities
//!
//! - [`reference_point`]: Per-objective maximum of a reference front plus a margin
//! - [`objective_bounds`] / [`normalize_front`]: Bring a front onto a common [0, 1] scale
//!
//! # References
//!
//! - Zitzler & Thiele (1999), "Multiobjective evolutionary algorithms: a comparative
//!   case study and the strength Pareto approach"
//! - While et al. (2006), "A faster algorithm for calculating hypervolume"

mod indicator;
mod reference;

pub use indicator::Hypervolume;
pub use reference::{normalize_front, objective_bounds, reference_point};
