//! Pareto selection and archiving core for evolutionary multi-objective
//! optimization.
//!
//! Provides the machinery that nearly every multi-objective algorithm
//! variant (NSGA-II, SPEA2, SMS-EMOA, MOPSO, ...) shares:
//!
//! - **Dominance**: Feasibility-then-Pareto comparison of two solutions.
//! - **Ranking**: Fast non-dominated sorting into ordered fronts, plus
//!   rank-and-density environmental replacement.
//! - **Density**: Crowding distance, k-nearest-neighbor distance, SPEA2
//!   strength fitness and hypervolume contribution.
//! - **Hypervolume**: Exact dominated volume and per-point exclusive
//!   contributions against a reference point.
//! - **Quality**: Additive epsilon and (inverted) generational distance.
//! - **Archive**: Unbounded and capacity-bounded non-dominated archives.
//!
//! All objectives are minimized. Solutions enter through the [`Solution`]
//! trait, which is implemented for plain objective vectors and for
//! [`EvaluatedSolution`].
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no problem definitions or variation operators: generational
//! drivers call into it once per generation.
//!
//! # Example
//!
//! ```
//! use u_pareto::{ArchiveConfig, BoundedArchive, Hypervolume};
//!
//! let mut archive = BoundedArchive::new(ArchiveConfig::hypervolume(10)).unwrap();
//! archive.insert(vec![0.0, 1.0]).unwrap();
//! archive.insert(vec![1.0, 0.0]).unwrap();
//! archive.insert(vec![2.0, 2.0]).unwrap(); // dominated, rejected
//!
//! let hv = Hypervolume::new(vec![2.0, 2.0]).unwrap();
//! assert_eq!(archive.len(), 2);
//! assert_eq!(archive.hypervolume(&hv).unwrap(), 3.0);
//! ```

pub mod archive;
pub mod density;
pub mod dominance;
pub mod hypervolume;
pub mod quality;
pub mod ranking;

mod error;
mod solution;

pub use archive::{ArchiveConfig, BoundedArchive};
pub use density::DensityEstimator;
pub use dominance::{Dominance, DominanceComparator};
pub use error::{ParetoError, Result};
pub use hypervolume::Hypervolume;
pub use ranking::{assign_attributes, select_by_rank_and_density, Front, Ranking};
pub use solution::{Attributes, EvaluatedSolution, Solution};
