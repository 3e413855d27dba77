//! Capacity-bounded non-dominated archive.

use std::cmp::Ordering;

use rand::Rng;

use super::config::{ArchiveConfig, TieBreak};
use super::non_dominated::{Admission, ArchiveEntry, NonDominatedArchive};
use crate::density::{sorted_neighbor_distances, DensityEstimator};
use crate::dominance::DominanceComparator;
use crate::error::Result;
use crate::hypervolume::Hypervolume;
use crate::solution::Solution;

/// Fill level of a bounded archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveState {
    /// No members.
    Empty,
    /// Fewer members than the capacity.
    Growing,
    /// Exactly `capacity` members.
    Full,
}

/// Non-dominated archive that never holds more than `capacity` members.
///
/// Admission follows [`NonDominatedArchive`]. Whenever the archive
/// overflows, the configured [`DensityEstimator`] scores the current
/// members (candidate included) and the least preferred one is evicted,
/// repeatedly, until the capacity holds again. Ties on the worst score are
/// broken by the configured [`TieBreak`], then by insertion order, or at
/// random when inserting through [`insert_with_rng`](Self::insert_with_rng).
///
/// Member attributes (rank and density) are refreshed after every eviction
/// round and on demand through [`refresh_attributes`](Self::refresh_attributes).
///
/// # Example
///
/// ```
/// use u_pareto::{ArchiveConfig, BoundedArchive};
///
/// let mut archive = BoundedArchive::new(ArchiveConfig::crowding_distance(3)).unwrap();
/// for p in [[1.0, 5.0], [2.0, 4.0], [3.0, 3.0], [4.0, 2.0], [5.0, 1.0]] {
///     archive.insert(p.to_vec()).unwrap();
/// }
///
/// assert_eq!(archive.len(), 3);
/// assert_eq!(
///     archive.objective_matrix(),
///     vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BoundedArchive<S> {
    config: ArchiveConfig,
    archive: NonDominatedArchive<S>,
}

impl<S: Solution> BoundedArchive<S> {
    /// Creates an empty archive.
    ///
    /// # Errors
    ///
    /// [`ParetoError::InvalidConfiguration`](crate::ParetoError::InvalidConfiguration)
    /// if `config` fails [`ArchiveConfig::validate`].
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        config.validate()?;
        let archive =
            NonDominatedArchive::with_comparator(config.comparator).with_dimension(config.objectives);
        Ok(Self { config, archive })
    }

    /// Creates an empty crowding-distance archive.
    ///
    /// # Errors
    ///
    /// Fails when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(ArchiveConfig::new(capacity))
    }

    /// Offers a candidate.
    ///
    /// Returns `true` iff the contents changed: the candidate is still a
    /// member afterwards, or it displaced dominated members before being
    /// evicted itself.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
    ///   if the candidate's objective count differs from the archive's
    /// - [`ParetoError::EmptyInput`](crate::ParetoError::EmptyInput) if the
    ///   candidate has no objectives
    ///
    /// The archive is unchanged when an error is returned.
    pub fn insert(&mut self, candidate: S) -> Result<bool> {
        self.insert_with(candidate, |tied| tied[0])
    }

    /// Like [`insert`](Self::insert), but remaining eviction ties are broken
    /// uniformly at random instead of by insertion order.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    pub fn insert_with_rng<R: Rng>(&mut self, candidate: S, rng: &mut R) -> Result<bool> {
        self.insert_with(candidate, |tied| tied[rng.random_range(0..tied.len())])
    }

    fn insert_with<F>(&mut self, candidate: S, mut pick: F) -> Result<bool>
    where
        F: FnMut(&[usize]) -> usize,
    {
        match self.archive.admit(candidate)? {
            Admission::Rejected => Ok(false),
            Admission::Admitted { removed, index } => {
                let evicted = self.prune(&mut pick)?;
                let kept = !evicted.contains(&index);
                Ok(kept || removed > 0)
            }
        }
    }

    /// Evicts until the capacity holds, returning the evicted insertion indices.
    fn prune<F>(&mut self, pick: &mut F) -> Result<Vec<u64>>
    where
        F: FnMut(&[usize]) -> usize,
    {
        let mut evicted = Vec::new();
        while self.archive.len() > self.config.capacity {
            let victim = self.least_valuable(pick)?;
            let entry = self.archive.remove(victim);
            log::debug!(
                "evicted archive member #{} by {} ({} members, capacity {})",
                entry.insertion_index,
                self.config.density.name(),
                self.archive.len(),
                self.config.capacity
            );
            evicted.push(entry.insertion_index);
        }
        if !evicted.is_empty() {
            self.refresh_attributes()?;
        }
        Ok(evicted)
    }

    /// Position of the member to evict next.
    fn least_valuable<F>(&self, pick: &mut F) -> Result<usize>
    where
        F: FnMut(&[usize]) -> usize,
    {
        let members: Vec<&S> = self.archive.solutions().collect();
        let scores = self
            .config
            .density
            .compute_density_with(&members, &self.config.comparator)?;

        let mut tied = scores.least_preferred();
        if tied.len() > 1 && self.config.tie_break == TieBreak::NeighborDistances {
            let objectives: Vec<&[f64]> = members.iter().map(|s| s.objectives()).collect();
            tied = most_crowded(&objectives, &tied)?;
        }

        Ok(match tied.len() {
            0 => 0,
            1 => tied[0],
            _ => pick(&tied),
        })
    }

    /// Recomputes rank and density attributes of every member.
    ///
    /// # Errors
    ///
    /// Propagates density estimation errors.
    pub fn refresh_attributes(&mut self) -> Result<()> {
        let scores = {
            let members: Vec<&S> = self.archive.solutions().collect();
            self.config
                .density
                .compute_density_with(&members, &self.config.comparator)?
        };
        let entries = self.archive.entries_mut();
        let mut attributes: Vec<_> = entries
            .iter()
            .map(|e| {
                let mut attr = e.attributes;
                attr.reset();
                attr.rank = Some(0);
                attr
            })
            .collect();
        self.config.density.write_attributes(&scores, &mut attributes);
        for (entry, attr) in entries.iter_mut().zip(attributes) {
            entry.attributes = attr;
        }
        Ok(())
    }

    /// Members in insertion order.
    pub fn solutions(&self) -> impl ExactSizeIterator<Item = &S> + '_ {
        self.archive.solutions()
    }

    /// Members with their bookkeeping, in insertion order.
    pub fn entries(&self) -> &[ArchiveEntry<S>] {
        self.archive.entries()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Maximum number of members.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Whether the archive holds `capacity` members.
    pub fn is_full(&self) -> bool {
        self.len() >= self.config.capacity
    }

    /// Current fill level.
    pub fn state(&self) -> ArchiveState {
        if self.is_empty() {
            ArchiveState::Empty
        } else if self.is_full() {
            ArchiveState::Full
        } else {
            ArchiveState::Growing
        }
    }

    /// Number of objectives, once established.
    pub fn dimension(&self) -> Option<usize> {
        self.archive.dimension()
    }

    /// The admission comparator.
    pub fn comparator(&self) -> &DominanceComparator {
        &self.config.comparator
    }

    /// The eviction density estimator.
    pub fn density_estimator(&self) -> &DensityEstimator {
        &self.config.density
    }

    /// The configuration the archive was built with.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Copies the members' objective vectors.
    pub fn objective_matrix(&self) -> Vec<Vec<f64>> {
        self.archive.objective_matrix()
    }

    /// Hypervolume of the current members under `indicator`.
    ///
    /// # Errors
    ///
    /// [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
    /// if the indicator's reference point has a different dimension.
    pub fn hypervolume(&self, indicator: &Hypervolume) -> Result<f64> {
        let objectives: Vec<&[f64]> = self.solutions().map(|s| s.objectives()).collect();
        indicator.compute(&objectives)
    }

    /// Consumes the archive, returning its members in insertion order.
    pub fn into_solutions(self) -> Vec<S> {
        self.archive.into_solutions()
    }
}

/// Narrows `tied` to the members whose sorted neighbor distances are
/// lexicographically smallest.
fn most_crowded(objectives: &[&[f64]], tied: &[usize]) -> Result<Vec<usize>> {
    let neighbors = sorted_neighbor_distances(objectives)?;
    let lexicographic = |a: &[f64], b: &[f64]| {
        a.iter()
            .zip(b)
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    };

    let mut best: Vec<usize> = Vec::with_capacity(tied.len());
    for &i in tied {
        match best.first() {
            None => best.push(i),
            Some(&b) => match lexicographic(&neighbors[i], &neighbors[b]) {
                Ordering::Less => {
                    best.clear();
                    best.push(i);
                }
                Ordering::Equal => best.push(i),
                Ordering::Greater => {}
            },
        }
    }
    Ok(best)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParetoError;
    use crate::solution::EvaluatedSolution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn staircase() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 5.0],
            vec![2.0, 4.0],
            vec![3.0, 3.0],
            vec![4.0, 2.0],
            vec![5.0, 1.0],
        ]
    }

    // ---- Construction ----

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<BoundedArchive<Vec<f64>>> = BoundedArchive::with_capacity(0);
        assert!(matches!(result, Err(ParetoError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_invalid_estimator_rejected() {
        let config = ArchiveConfig::new(4).with_density(DensityEstimator::KNearestNeighbor { k: 0 });
        assert!(BoundedArchive::<Vec<f64>>::new(config).is_err());
    }

    #[test]
    fn test_state_transitions() {
        let mut archive = BoundedArchive::with_capacity(2).unwrap();
        assert_eq!(archive.state(), ArchiveState::Empty);
        archive.insert(vec![1.0, 2.0]).unwrap();
        assert_eq!(archive.state(), ArchiveState::Growing);
        archive.insert(vec![2.0, 1.0]).unwrap();
        assert_eq!(archive.state(), ArchiveState::Full);
        assert!(archive.is_full());
    }

    #[test]
    fn test_fixed_objectives() {
        let config = ArchiveConfig::new(4).with_objectives(3);
        let mut archive = BoundedArchive::new(config).unwrap();
        assert_eq!(archive.dimension(), Some(3));
        assert!(matches!(
            archive.insert(vec![1.0, 2.0]),
            Err(ParetoError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert!(archive.is_empty());
    }

    // ---- Admission ----

    #[test]
    fn test_dominated_candidate_rejected() {
        let mut archive = BoundedArchive::with_capacity(5).unwrap();
        archive.insert(vec![1.0, 1.0]).unwrap();
        assert!(!archive.insert(vec![2.0, 2.0]).unwrap());
        assert!(!archive.insert(vec![1.0, 1.0]).unwrap());
        assert_eq!(archive.size(), 1);
    }

    #[test]
    fn test_dominating_candidate_clears_members() {
        let mut archive = BoundedArchive::with_capacity(5).unwrap();
        for p in staircase() {
            archive.insert(p).unwrap();
        }
        assert_eq!(archive.len(), 5);
        assert!(archive.insert(vec![0.0, 0.0]).unwrap());
        assert_eq!(archive.objective_matrix(), vec![vec![0.0, 0.0]]);
    }

    #[test]
    fn test_dimension_mismatch_leaves_archive_unchanged() {
        let mut archive = BoundedArchive::with_capacity(3).unwrap();
        archive.insert(vec![1.0, 2.0]).unwrap();
        let before = archive.objective_matrix();
        assert!(archive.insert(vec![0.0, 0.0, 0.0]).is_err());
        assert_eq!(archive.objective_matrix(), before);
    }

    // ---- Eviction ----

    #[test]
    fn test_crowding_eviction_sequence() {
        let mut archive = BoundedArchive::with_capacity(3).unwrap();
        let mut results = Vec::new();
        for p in staircase() {
            results.push(archive.insert(p).unwrap());
        }
        assert_eq!(results, vec![true; 5]);
        // 4th insert: (2,4) and (3,3) tie on crowding and on neighbor
        // distances, the older (2,4) goes. 5th insert: (4,2) scores 1.0
        // against 1.5 for (3,3).
        assert_eq!(
            archive.objective_matrix(),
            vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]]
        );
        let indices: Vec<u64> = archive.entries().iter().map(|e| e.insertion_index()).collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn test_candidate_evicted_immediately_returns_false() {
        let mut archive = BoundedArchive::with_capacity(2).unwrap();
        archive.insert(vec![0.0, 10.0]).unwrap();
        archive.insert(vec![10.0, 0.0]).unwrap();
        // interior point: finite crowding, boundaries infinite
        assert!(!archive.insert(vec![5.0, 5.0]).unwrap());
        assert_eq!(archive.len(), 2);
        assert!(archive.solutions().all(|s| s != &vec![5.0, 5.0]));
    }

    #[test]
    fn test_attributes_refreshed_after_eviction() {
        let mut archive = BoundedArchive::with_capacity(3).unwrap();
        for p in staircase() {
            archive.insert(p).unwrap();
        }
        for entry in archive.entries() {
            assert_eq!(entry.attributes().rank, Some(0));
            assert!(entry.attributes().crowding_distance.is_some());
        }
        assert_eq!(archive.entries()[1].attributes().crowding_distance, Some(2.0));
    }

    #[test]
    fn test_hypervolume_archive_keeps_best_contributors() {
        let config = ArchiveConfig::hypervolume(3);
        let mut archive = BoundedArchive::new(config).unwrap();
        archive.insert(vec![0.0, 1.0]).unwrap();
        archive.insert(vec![1.0, 0.0]).unwrap();
        archive.insert(vec![0.5, 0.5]).unwrap();
        // barely non-dominated, contributes almost nothing
        archive.insert(vec![0.49, 0.52]).unwrap();
        assert_eq!(archive.len(), 3);
        assert!(archive.solutions().any(|s| s == &vec![0.5, 0.5]));
        assert!(archive
            .entries()
            .iter()
            .all(|e| e.attributes().hypervolume_contribution.is_some()));
    }

    #[test]
    fn test_strength_archive_bounded() {
        let mut archive = BoundedArchive::new(ArchiveConfig::strength(2)).unwrap();
        for p in staircase() {
            archive.insert(p).unwrap();
        }
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_knn_archive_bounded() {
        let mut archive = BoundedArchive::new(ArchiveConfig::k_nearest_neighbor(3, 1)).unwrap();
        for p in staircase() {
            archive.insert(p).unwrap();
        }
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_insertion_order_tie_break() {
        let config = ArchiveConfig::new(1).with_tie_break(TieBreak::InsertionOrder);
        let mut archive = BoundedArchive::new(config).unwrap();
        archive.insert(vec![1.0, 2.0]).unwrap();
        // both boundaries score infinity: the older member goes
        assert!(archive.insert(vec![2.0, 1.0]).unwrap());
        assert_eq!(archive.objective_matrix(), vec![vec![2.0, 1.0]]);
    }

    #[test]
    fn test_random_tie_break_reproducible() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut archive = BoundedArchive::with_capacity(1).unwrap();
            for p in staircase() {
                archive.insert_with_rng(p, &mut rng).unwrap();
            }
            archive.objective_matrix()
        };
        assert_eq!(run(7), run(7));
        assert_eq!(run(7).len(), 1);
    }

    // ---- Tie-break helper ----

    #[test]
    fn test_most_crowded_prefers_closest_neighbors() {
        let points: Vec<&[f64]> = vec![&[0.0, 10.0], &[1.0, 9.0], &[5.0, 5.0], &[10.0, 0.0]];
        assert_eq!(most_crowded(&points, &[1, 2]).unwrap(), vec![1]);
        assert_eq!(most_crowded(&points, &[2]).unwrap(), vec![2]);
    }

    // ---- Accessors ----

    #[test]
    fn test_hypervolume_of_members() {
        let mut archive = BoundedArchive::with_capacity(10).unwrap();
        archive.insert(vec![0.0, 1.0]).unwrap();
        archive.insert(vec![1.0, 0.0]).unwrap();
        let hv = Hypervolume::new(vec![2.0, 2.0]).unwrap();
        assert!((archive.hypervolume(&hv).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constrained_members() {
        let mut archive = BoundedArchive::with_capacity(3).unwrap();
        archive
            .insert(EvaluatedSolution::new(vec![0.0, 0.0]).with_violation(-2.0))
            .unwrap();
        assert!(archive
            .insert(EvaluatedSolution::new(vec![0.0, 0.0]).with_violation(-1.0))
            .unwrap());
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.into_solutions()[0].constraint_violation, -1.0);
    }
}
