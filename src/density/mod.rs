//! Density estimation.
//!
//! Density estimators score how crowded each solution is, so that ties in
//! rank (or a full archive) can be resolved in favor of diversity.
//!
//! # Estimators
//!
//! - [`DensityEstimator::CrowdingDistance`]: per-front spacing to neighbors (NSGA-II)
//! - [`DensityEstimator::KNearestNeighbor`]: distance to the k-th nearest neighbor
//! - [`DensityEstimator::StrengthRawFitness`]: population-wide SPEA2 fitness
//! - [`DensityEstimator::HypervolumeContribution`]: exclusive hypervolume (SMS-EMOA)
//!
//! Every estimator reports a [`Preference`] telling which end of its score
//! is retained first; [`DensityScores::sorted_indices`] applies it.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto
//!   Evolutionary Algorithm"
//! - Beume, Naujoks & Emmerich (2007), "SMS-EMOA: Multiobjective selection based
//!   on dominated hypervolume"

mod contribution;
mod crowding;
mod estimator;
mod knn;
mod strength;

pub use contribution::normalized_contributions;
pub use crowding::crowding_distance;
pub use estimator::{DensityEstimator, DensityScores, Preference};
pub use knn::{distance_matrix, euclidean_distance, kth_nearest_distances, sorted_neighbor_distances};
pub use strength::strength_raw_fitness;
