//! Strength / raw-fitness (SPEA2).

use super::knn::kth_nearest_distances;
use crate::dominance::{Dominance, DominanceComparator};
use crate::error::{common_dimension, ParetoError, Result};
use crate::solution::Solution;

/// SPEA2 fitness: raw fitness plus a k-th-nearest-neighbor density term.
///
/// - `strength(s)` = number of solutions `s` dominates
/// - `raw(s)` = sum of the strengths of every solution dominating `s`
///   (0 exactly when nothing dominates `s`)
/// - `fitness(s)` = `raw(s) + 1 / (d_k(s) + 2)`
///
/// The density term is below 1/2, so it only separates solutions of equal
/// raw fitness. Lower is better. Unlike crowding distance this is computed
/// over the whole population, not per front.
///
/// # Errors
///
/// - [`ParetoError::InvalidConfiguration`] if `k == 0`
/// - [`ParetoError::DimensionMismatch`] if objective lengths disagree
///
/// # Example
///
/// ```
/// use u_pareto::density::strength_raw_fitness;
/// use u_pareto::DominanceComparator;
///
/// let pop = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
/// let fitness = strength_raw_fitness(&pop, 1, &DominanceComparator::default()).unwrap();
///
/// assert!(fitness[0] < 1.0);              // non-dominated
/// assert!(fitness[1] >= 2.0);             // dominated by a strength-2 solution
/// assert!(fitness[2] >= 3.0);             // strengths 2 + 1
/// ```
pub fn strength_raw_fitness<S: Solution>(
    set: &[S],
    k: usize,
    comparator: &DominanceComparator,
) -> Result<Vec<f64>> {
    if k == 0 {
        return Err(ParetoError::InvalidConfiguration(
            "k-nearest-neighbor k must be at least 1".into(),
        ));
    }

    let objectives: Vec<&[f64]> = set.iter().map(|s| s.objectives()).collect();
    common_dimension(&objectives)?;

    let n = set.len();
    let mut strength = vec![0usize; n];
    // dominators[j] lists every i that dominates j
    let mut dominators: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match comparator.dominance(&set[i], &set[j])? {
                Dominance::Dominates => {
                    strength[i] += 1;
                    dominators[j].push(i);
                }
                Dominance::DominatedBy => {
                    strength[j] += 1;
                    dominators[i].push(j);
                }
                Dominance::NonDominated => {}
            }
        }
    }

    let kth = kth_nearest_distances(&objectives, k)?;

    Ok((0..n)
        .map(|j| {
            let raw: usize = dominators[j].iter().map(|&i| strength[i]).sum();
            raw as f64 + 1.0 / (kth[j] + 2.0)
        })
        .collect())
}
