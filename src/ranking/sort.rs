//! Fast non-dominated sorting.

use crate::dominance::{Dominance, DominanceComparator};
use crate::error::{common_dimension, Result};
use crate::solution::Solution;

/// One non-dominated front: indices into the ranked collection.
///
/// Members are stored in ascending input order, so reporting order is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Front {
    /// Rank of this front (0 = non-dominated).
    pub rank: usize,

    /// Indices of the solutions in this front.
    pub members: Vec<usize>,
}

impl Front {
    /// Number of solutions in the front.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the front has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the solution at `index` belongs to this front.
    pub fn contains(&self, index: usize) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    /// Iterates over member indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }
}

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Fronts in rank order: `fronts[0]` contains the rank-0 indices, etc.
    pub fronts: Vec<Front>,
}

impl Ranking {
    /// Partitions `solutions` into non-dominated fronts.
    ///
    /// # Algorithm (Deb et al., 2002)
    ///
    /// 1. For each pair of solutions, determine dominance with `comparator`
    /// 2. Solutions dominated by no other belong to front 0 (rank 0)
    /// 3. Remove front 0, repeat to find subsequent fronts
    ///
    /// # Complexity
    ///
    /// O(m * n²) time and O(n²) auxiliary space, where m = number of
    /// objectives and n = number of solutions.
    ///
    /// # Errors
    ///
    /// [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
    /// if the objective vectors differ in length.
    ///
    /// # Example
    ///
    /// ```
    /// use u_pareto::{DominanceComparator, EvaluatedSolution, Ranking};
    ///
    /// let population = vec![
    ///     EvaluatedSolution::new(vec![1.0, 5.0]),
    ///     EvaluatedSolution::new(vec![4.0, 4.0]),
    ///     EvaluatedSolution::new(vec![5.0, 1.0]),
    ///     EvaluatedSolution::new(vec![0.0, 0.0]).with_violation(-2.0),
    /// ];
    ///
    /// let ranking = Ranking::compute(&population, &DominanceComparator::default()).unwrap();
    /// assert_eq!(ranking.fronts[0].members, vec![0, 1, 2]);
    /// assert_eq!(ranking.rank_of(3), Some(1)); // infeasible ranks last
    /// ```
    pub fn compute<S: Solution>(solutions: &[S], comparator: &DominanceComparator) -> Result<Self> {
        let n = solutions.len();
        if n == 0 {
            return Ok(Self::default());
        }

        let objectives: Vec<&[f64]> = solutions.iter().map(|s| s.objectives()).collect();
        common_dimension(&objectives)?;

        let mut domination_count = vec![0usize; n];
        let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut ranks = vec![0usize; n];

        // Compute dominance relationships
        for i in 0..n {
            for j in (i + 1)..n {
                match comparator.dominance(&solutions[i], &solutions[j])? {
                    Dominance::Dominates => {
                        dominated_by[i].push(j);
                        domination_count[j] += 1;
                    }
                    Dominance::DominatedBy => {
                        dominated_by[j].push(i);
                        domination_count[i] += 1;
                    }
                    Dominance::NonDominated => {}
                }
            }
        }

        let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

        // Build subsequent fronts
        let mut fronts = vec![Front {
            rank: 0,
            members: front_0,
        }];
        loop {
            let rank = fronts.len();
            let mut next_front = Vec::new();

            for &i in &fronts[rank - 1].members {
                for &j in &dominated_by[i] {
                    domination_count[j] -= 1;
                    if domination_count[j] == 0 {
                        ranks[j] = rank;
                        next_front.push(j);
                    }
                }
            }

            if next_front.is_empty() {
                break;
            }
            next_front.sort_unstable();
            fronts.push(Front {
                rank,
                members: next_front,
            });
        }

        log::trace!("ranked {} solutions into {} fronts", n, fronts.len());
        Ok(Self { ranks, fronts })
    }

    /// Number of fronts found.
    pub fn number_of_fronts(&self) -> usize {
        self.fronts.len()
    }

    /// Returns the front with the given rank.
    pub fn front(&self, rank: usize) -> Option<&Front> {
        self.fronts.get(rank)
    }

    /// Rank of the solution at `index`.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }

    /// Number of ranked solutions.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no solution was ranked.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Fast non-dominated sorting over raw objective vectors.
///
/// Assigns a Pareto rank to each vector, ignoring constraints.
/// All objectives are **minimized**: lower values are better.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
/// if inner vectors have inconsistent lengths.
///
/// # Example
///
/// ```
/// use u_pareto::ranking::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],  // Solution A
///     vec![3.0, 3.0],  // Solution B
///     vec![5.0, 1.0],  // Solution C
///     vec![4.0, 4.0],  // Solution D: dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives).unwrap();
///
/// // A, B, C are non-dominated (rank 0)
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts[1].members, vec![3]);
/// ```
pub fn non_dominated_sort<P: AsRef<[f64]>>(objectives: &[P]) -> Result<Ranking> {
    let points: Vec<&[f64]> = objectives.iter().map(|p| p.as_ref()).collect();
    Ranking::compute(&points, &DominanceComparator::unconstrained())
}

/// Indices of the solutions not dominated by any other, in input order.
///
/// Equivalent to `fronts[0]` of a full ranking, without building the
/// remaining fronts.
pub fn pareto_front<S: Solution>(solutions: &[S], comparator: &DominanceComparator) -> Result<Vec<usize>> {
    let objectives: Vec<&[f64]> = solutions.iter().map(|s| s.objectives()).collect();
    common_dimension(&objectives)?;

    let mut front = Vec::new();
    'outer: for (i, candidate) in solutions.iter().enumerate() {
        for (j, other) in solutions.iter().enumerate() {
            if i != j && comparator.dominance(other, candidate)? == Dominance::Dominates {
                continue 'outer;
            }
        }
        front.push(i);
    }
    Ok(front)
}

// ============================================================================
// Tests
// ============================================================================
