//! Density estimator strategies.

use std::cmp::Ordering;

use super::contribution::normalized_contributions;
use super::crowding::crowding_distance;
use super::knn::kth_nearest_distances;
use super::strength::strength_raw_fitness;
use crate::dominance::DominanceComparator;
use crate::error::{common_dimension, ParetoError, Result};
use crate::solution::{Attributes, Solution};

/// Which end of a density score is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Larger scores are retained first (crowding distance, k-NN distance,
    /// hypervolume contribution).
    HigherIsBetter,
    /// Smaller scores are retained first (SPEA2 fitness).
    LowerIsBetter,
}

impl Preference {
    /// Orders two scores so that `Less` means `a` is preferred.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Preference::HigherIsBetter => ord.reverse(),
            Preference::LowerIsBetter => ord,
        }
    }
}

/// Scores produced by [`DensityEstimator::compute_density`].
///
/// Scores are keyed by the position of the solution in the scored set.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityScores {
    values: Vec<f64>,
    preference: Preference,
}

impl DensityScores {
    /// Wraps raw scores.
    pub fn new(values: Vec<f64>, preference: Preference) -> Self {
        Self { values, preference }
    }

    /// Score of the solution at `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// All scores in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Which end of the scale is preferred.
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// Number of scored solutions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was scored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices ordered by decreasing preference; ties keep input order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.values.len()).collect();
        indices.sort_by(|&a, &b| self.preference.compare(self.values[a], self.values[b]));
        indices
    }

    /// Indices of every solution tied for the least preferred score.
    pub fn least_preferred(&self) -> Vec<usize> {
        let Some(worst) = self
            .values
            .iter()
            .copied()
            .max_by(|&a, &b| self.preference.compare(a, b))
        else {
            return Vec::new();
        };
        (0..self.values.len())
            .filter(|&i| self.preference.compare(self.values[i], worst) == Ordering::Equal)
            .collect()
    }
}

/// Density estimation strategy, selected by configuration.
///
/// # Examples
///
/// ```
/// use u_pareto::DensityEstimator;
///
/// let front = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
///
/// let crowding = DensityEstimator::CrowdingDistance;
/// let scores = crowding.compute_density(&front).unwrap();
/// assert!(scores.get(0).unwrap().is_infinite());
/// assert_eq!(crowding.sort(&scores), vec![0, 2, 1]);
///
/// let knn = DensityEstimator::KNearestNeighbor { k: 1 };
/// assert!(knn.compute_density(&front).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityEstimator {
    /// Crowding distance within one front (NSGA-II).
    ///
    /// Higher = less crowded = retained first.
    CrowdingDistance,

    /// Distance to the k-th nearest neighbor in objective space.
    ///
    /// Higher = less crowded = retained first.
    KNearestNeighbor {
        /// Neighbor order (at least 1).
        k: usize,
    },

    /// SPEA2 strength / raw-fitness with a k-NN density term, computed over
    /// the whole population.
    ///
    /// Lower = better = retained first.
    StrengthRawFitness {
        /// Neighbor order of the density term (at least 1).
        k: usize,
    },

    /// Exclusive hypervolume contribution on the normalized set (SMS-EMOA).
    ///
    /// Higher = retained first.
    HypervolumeContribution {
        /// Distance of the reference point beyond the normalized maximum.
        offset: f64,
    },
}

impl Default for DensityEstimator {
    fn default() -> Self {
        DensityEstimator::CrowdingDistance
    }
}

impl DensityEstimator {
    /// Default reference-point offset for [`DensityEstimator::HypervolumeContribution`].
    pub const DEFAULT_OFFSET: f64 = 1.0;

    /// k-NN density with `k = 1`.
    pub fn nearest_neighbor() -> Self {
        DensityEstimator::KNearestNeighbor { k: 1 }
    }

    /// SPEA2 fitness with `k = 1`.
    pub fn strength() -> Self {
        DensityEstimator::StrengthRawFitness { k: 1 }
    }

    /// Hypervolume contribution with the default offset.
    pub fn hypervolume_contribution() -> Self {
        DensityEstimator::HypervolumeContribution {
            offset: Self::DEFAULT_OFFSET,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            DensityEstimator::CrowdingDistance => "crowding-distance",
            DensityEstimator::KNearestNeighbor { .. } => "k-nearest-neighbor",
            DensityEstimator::StrengthRawFitness { .. } => "strength-raw-fitness",
            DensityEstimator::HypervolumeContribution { .. } => "hypervolume-contribution",
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// [`ParetoError::InvalidConfiguration`] if `k == 0` or the offset is
    /// not positive and finite.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DensityEstimator::CrowdingDistance => Ok(()),
            DensityEstimator::KNearestNeighbor { k } | DensityEstimator::StrengthRawFitness { k } => {
                if k == 0 {
                    Err(ParetoError::InvalidConfiguration(
                        "k-nearest-neighbor k must be at least 1".into(),
                    ))
                } else {
                    Ok(())
                }
            }
            DensityEstimator::HypervolumeContribution { offset } => {
                if offset > 0.0 && offset.is_finite() {
                    Ok(())
                } else {
                    Err(ParetoError::InvalidConfiguration(format!(
                        "hypervolume offset must be positive and finite, got {offset}"
                    )))
                }
            }
        }
    }

    /// Which end of the score is preferred.
    pub fn preference(&self) -> Preference {
        match self {
            DensityEstimator::StrengthRawFitness { .. } => Preference::LowerIsBetter,
            _ => Preference::HigherIsBetter,
        }
    }

    /// Whether scores are meant for a whole population rather than one front.
    pub fn is_population_wide(&self) -> bool {
        matches!(self, DensityEstimator::StrengthRawFitness { .. })
    }

    /// Scores every solution of `set` with the default comparator.
    ///
    /// # Errors
    ///
    /// See [`compute_density_with`](Self::compute_density_with).
    pub fn compute_density<S: Solution>(&self, set: &[S]) -> Result<DensityScores> {
        self.compute_density_with(set, &DominanceComparator::default())
    }

    /// Scores every solution of `set`.
    ///
    /// `comparator` is only consulted by the strength-based estimator.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::InvalidConfiguration`] if the parameters are invalid
    /// - [`ParetoError::DimensionMismatch`] if objective lengths disagree
    pub fn compute_density_with<S: Solution>(
        &self,
        set: &[S],
        comparator: &DominanceComparator,
    ) -> Result<DensityScores> {
        self.validate()?;
        let objectives: Vec<&[f64]> = set.iter().map(|s| s.objectives()).collect();
        common_dimension(&objectives)?;

        let values = match *self {
            DensityEstimator::CrowdingDistance => crowding_distance(&objectives)?,
            DensityEstimator::KNearestNeighbor { k } => kth_nearest_distances(&objectives, k)?,
            DensityEstimator::StrengthRawFitness { k } => strength_raw_fitness(set, k, comparator)?,
            DensityEstimator::HypervolumeContribution { offset } => {
                normalized_contributions(&objectives, offset)?
            }
        };

        log::trace!("{} scored {} solutions", self.name(), values.len());
        Ok(DensityScores::new(values, self.preference()))
    }

    /// Indices of the scored set ordered by decreasing preference.
    pub fn sort(&self, scores: &DensityScores) -> Vec<usize> {
        scores.sorted_indices()
    }

    /// Writes the scores into per-solution attributes.
    ///
    /// `density` is always set; `crowding_distance` and
    /// `hypervolume_contribution` are set when this estimator computes them.
    pub fn write_attributes(&self, scores: &DensityScores, attributes: &mut [Attributes]) {
        for (attr, &value) in attributes.iter_mut().zip(scores.values()) {
            attr.density = Some(value);
            match self {
                DensityEstimator::CrowdingDistance => attr.crowding_distance = Some(value),
                DensityEstimator::HypervolumeContribution { .. } => {
                    attr.hypervolume_contribution = Some(value)
                }
                _ => {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
