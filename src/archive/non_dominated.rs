//! Unbounded archive of mutually non-dominated solutions.

use crate::dominance::{objectives_equal, Dominance, DominanceComparator};
use crate::error::{ParetoError, Result};
use crate::solution::{Attributes, Solution};

/// A member of an archive together with its bookkeeping.
#[derive(Debug, Clone)]
pub struct ArchiveEntry<S> {
    pub(crate) solution: S,
    pub(crate) insertion_index: u64,
    pub(crate) attributes: Attributes,
}

impl<S> ArchiveEntry<S> {
    /// The archived solution.
    pub fn solution(&self) -> &S {
        &self.solution
    }

    /// Monotonic counter value assigned when the solution was admitted.
    pub fn insertion_index(&self) -> u64 {
        self.insertion_index
    }

    /// Scores from the last density computation over the archive.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Consumes the entry, returning the solution.
    pub fn into_solution(self) -> S {
        self.solution
    }
}

/// Outcome of the admission test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// The candidate is dominated by, or objective-equal to, a member.
    Rejected,
    /// The candidate was added after removing `removed` dominated members.
    Admitted { removed: usize, index: u64 },
}

/// Archive keeping every non-dominated solution it has seen.
///
/// A candidate is rejected when a member dominates it or has identical
/// objectives; otherwise every member it dominates is removed and the
/// candidate is appended. Members stay in insertion order.
///
/// # Example
///
/// ```
/// use u_pareto::archive::NonDominatedArchive;
///
/// let mut archive = NonDominatedArchive::new();
/// assert!(archive.insert(vec![2.0, 2.0]).unwrap());
/// assert!(archive.insert(vec![1.0, 3.0]).unwrap());
/// assert!(!archive.insert(vec![3.0, 3.0]).unwrap()); // dominated
/// assert!(archive.insert(vec![1.0, 1.0]).unwrap());  // dominates both
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<S> {
    comparator: DominanceComparator,
    entries: Vec<ArchiveEntry<S>>,
    dimension: Option<usize>,
    next_index: u64,
}

impl<S: Solution> Default for NonDominatedArchive<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution> NonDominatedArchive<S> {
    /// Creates an empty archive with the default constrained comparator.
    pub fn new() -> Self {
        Self::with_comparator(DominanceComparator::default())
    }

    /// Creates an empty archive with the given comparator.
    pub fn with_comparator(comparator: DominanceComparator) -> Self {
        Self {
            comparator,
            entries: Vec::new(),
            dimension: None,
            next_index: 0,
        }
    }

    /// Fixes the number of objectives before the first insertion.
    pub(crate) fn with_dimension(mut self, dimension: Option<usize>) -> Self {
        self.dimension = dimension;
        self
    }

    /// Offers a candidate. Returns `true` iff it was added.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::DimensionMismatch`] if the candidate's objective count
    ///   differs from the archive's
    /// - [`ParetoError::EmptyInput`] if the candidate has no objectives
    ///
    /// The archive is unchanged when an error is returned.
    pub fn insert(&mut self, candidate: S) -> Result<bool> {
        Ok(matches!(self.admit(candidate)?, Admission::Admitted { .. }))
    }

    pub(crate) fn admit(&mut self, candidate: S) -> Result<Admission> {
        let actual = candidate.objectives().len();
        match self.dimension {
            Some(expected) if expected != actual => {
                return Err(ParetoError::DimensionMismatch { expected, actual });
            }
            None if actual == 0 => return Err(ParetoError::EmptyInput("objective vector")),
            _ => {}
        }

        let mut dominated = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            match self.comparator.dominance(&candidate, &entry.solution)? {
                Dominance::Dominates => dominated.push(i),
                Dominance::DominatedBy => return Ok(Admission::Rejected),
                Dominance::NonDominated => {
                    if objectives_equal(candidate.objectives(), entry.solution.objectives()) {
                        return Ok(Admission::Rejected);
                    }
                }
            }
        }

        let removed = dominated.len();
        if removed > 0 {
            let mut position = 0;
            self.entries.retain(|_| {
                let keep = dominated.binary_search(&position).is_err();
                position += 1;
                keep
            });
        }

        let index = self.next_index;
        self.next_index += 1;
        self.dimension = Some(actual);
        self.entries.push(ArchiveEntry {
            solution: candidate,
            insertion_index: index,
            attributes: Attributes::default(),
        });

        Ok(Admission::Admitted { removed, index })
    }

    /// Members in insertion order.
    pub fn solutions(&self) -> impl ExactSizeIterator<Item = &S> + '_ {
        self.entries.iter().map(|e| &e.solution)
    }

    /// Members with their bookkeeping, in insertion order.
    pub fn entries(&self) -> &[ArchiveEntry<S>] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ArchiveEntry<S>] {
        &mut self.entries
    }

    pub(crate) fn remove(&mut self, position: usize) -> ArchiveEntry<S> {
        self.entries.remove(position)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of objectives, once established.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// The admission comparator.
    pub fn comparator(&self) -> &DominanceComparator {
        &self.comparator
    }

    /// Copies the members' objective vectors.
    pub fn objective_matrix(&self) -> Vec<Vec<f64>> {
        self.solutions().map(|s| s.objectives().to_vec()).collect()
    }

    /// Consumes the archive, returning its members in insertion order.
    pub fn into_solutions(self) -> Vec<S> {
        self.entries.into_iter().map(ArchiveEntry::into_solution).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
