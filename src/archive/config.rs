//! Archive configuration.
//!
//! [`ArchiveConfig`] holds everything that decides admission and eviction.

use crate::density::DensityEstimator;
use crate::dominance::DominanceComparator;
use crate::error::{ParetoError, Result};

/// How ties on the least preferred density score are broken.
///
/// Exactly one policy applies per archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Compare each tied member's ascending list of distances to the other
    /// members lexicographically and evict the smallest (most crowded), as
    /// in SPEA2 truncation. Remaining ties fall back to insertion order.
    #[default]
    NeighborDistances,

    /// Evict the tied member inserted first.
    InsertionOrder,
}

/// Configuration for a bounded archive.
///
/// # Defaults
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, TieBreak};
/// use u_pareto::DensityEstimator;
///
/// let config = ArchiveConfig::default();
/// assert_eq!(config.capacity, 100);
/// assert_eq!(config.density, DensityEstimator::CrowdingDistance);
/// assert_eq!(config.tie_break, TieBreak::NeighborDistances);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, TieBreak};
/// use u_pareto::DensityEstimator;
///
/// let config = ArchiveConfig::new(50)
///     .with_density(DensityEstimator::hypervolume_contribution())
///     .with_tie_break(TieBreak::InsertionOrder)
///     .with_objectives(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveConfig {
    /// Maximum number of members kept after any insertion.
    pub capacity: usize,

    /// Strategy that scores members when the archive overflows.
    pub density: DensityEstimator,

    /// Comparator deciding admission and dominance removal.
    pub comparator: DominanceComparator,

    /// Policy for ties on the least preferred density score.
    pub tie_break: TieBreak,

    /// Number of objectives, if known up front.
    ///
    /// `None` establishes it from the first inserted solution.
    pub objectives: Option<usize>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            density: DensityEstimator::default(),
            comparator: DominanceComparator::default(),
            tie_break: TieBreak::default(),
            objectives: None,
        }
    }
}

impl ArchiveConfig {
    /// Default configuration with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the density estimator.
    pub fn with_density(mut self, density: DensityEstimator) -> Self {
        self.density = density;
        self
    }

    /// Sets the dominance comparator.
    pub fn with_comparator(mut self, comparator: DominanceComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Fixes the number of objectives.
    pub fn with_objectives(mut self, objectives: usize) -> Self {
        self.objectives = Some(objectives);
        self
    }

    /// Preset: crowding-distance archive (NSGA-II / SMPSO style).
    pub fn crowding_distance(capacity: usize) -> Self {
        Self::new(capacity).with_density(DensityEstimator::CrowdingDistance)
    }

    /// Preset: hypervolume-contribution archive (SMS-EMOA style).
    pub fn hypervolume(capacity: usize) -> Self {
        Self::new(capacity).with_density(DensityEstimator::hypervolume_contribution())
    }

    /// Preset: SPEA2 strength archive.
    pub fn strength(capacity: usize) -> Self {
        Self::new(capacity).with_density(DensityEstimator::strength())
    }

    /// Preset: k-nearest-neighbor archive.
    pub fn k_nearest_neighbor(capacity: usize, k: usize) -> Self {
        Self::new(capacity).with_density(DensityEstimator::KNearestNeighbor { k })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`ParetoError::InvalidConfiguration`] with a description if any
    /// parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ParetoError::InvalidConfiguration(
                "archive capacity must be at least 1".into(),
            ));
        }
        if self.objectives == Some(0) {
            return Err(ParetoError::InvalidConfiguration(
                "number of objectives must be at least 1".into(),
            ));
        }
        self.density.validate()
    }
}
