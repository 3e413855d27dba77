//! Rank-and-density scoring and environmental replacement.
//!
//! These are the once-per-generation calls a driver makes after evaluating
//! offspring: score the merged population, then keep the best `count`.
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Nebro et al. (2022), "Automatic design of multi-objective metaheuristics:
//!   the ranking-and-density-estimator replacement"

use super::sort::Ranking;
use crate::density::DensityEstimator;
use crate::dominance::DominanceComparator;
use crate::error::Result;
use crate::solution::{Attributes, Solution};

/// Ranks `solutions` and scores each front with `estimator`.
///
/// The returned vector is parallel to `solutions`. Per-front estimators
/// score each front on its own; the strength estimator scores the whole
/// population at once.
///
/// # Errors
///
/// - [`ParetoError::InvalidConfiguration`](crate::ParetoError::InvalidConfiguration)
///   if the estimator parameters are invalid
/// - [`ParetoError::DimensionMismatch`](crate::ParetoError::DimensionMismatch)
///   if objective lengths disagree
///
/// # Example
///
/// ```
/// use u_pareto::{assign_attributes, DensityEstimator, DominanceComparator};
///
/// let pop = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0], vec![3.0, 3.0]];
/// let attrs = assign_attributes(&pop, &DensityEstimator::CrowdingDistance,
///                               &DominanceComparator::default()).unwrap();
///
/// assert_eq!(attrs[3].rank, Some(1));
/// assert!(attrs[0].crowding_distance.unwrap().is_infinite());
/// ```
pub fn assign_attributes<S: Solution>(
    solutions: &[S],
    estimator: &DensityEstimator,
    comparator: &DominanceComparator,
) -> Result<Vec<Attributes>> {
    estimator.validate()?;
    let ranking = Ranking::compute(solutions, comparator)?;

    let mut attributes: Vec<Attributes> = ranking
        .ranks
        .iter()
        .map(|&rank| Attributes {
            rank: Some(rank),
            ..Attributes::default()
        })
        .collect();

    if estimator.is_population_wide() {
        let scores = estimator.compute_density_with(solutions, comparator)?;
        estimator.write_attributes(&scores, &mut attributes);
        return Ok(attributes);
    }

    for front in &ranking.fronts {
        let members: Vec<&S> = front.iter().map(|i| &solutions[i]).collect();
        let scores = estimator.compute_density_with(&members, comparator)?;

        let mut front_attributes: Vec<Attributes> = front.iter().map(|i| attributes[i]).collect();
        estimator.write_attributes(&scores, &mut front_attributes);
        for (i, attr) in front.iter().zip(front_attributes) {
            attributes[i] = attr;
        }
    }

    Ok(attributes)
}

/// Selects `count` solutions by rank, breaking the last admitted front by
/// density preference.
///
/// Whole fronts are taken in rank order while they fit; the first front
/// that does not fit is sorted by `estimator` (most preferred first, ties
/// by input order) and truncated. Returns indices in selection order. If
/// `count` exceeds the population, every index is returned.
///
/// # Errors
///
/// Same as [`assign_attributes`].
///
/// # Example
///
/// ```
/// use u_pareto::{select_by_rank_and_density, DensityEstimator, DominanceComparator};
///
/// let pop = vec![
///     vec![1.0, 5.0],
///     vec![2.0, 4.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![6.0, 6.0], // dominated
/// ];
/// let survivors = select_by_rank_and_density(
///     &pop, 3, &DensityEstimator::CrowdingDistance, &DominanceComparator::default(),
/// ).unwrap();
///
/// // the two extremes are always kept
/// assert!(survivors.contains(&0) && survivors.contains(&3));
/// assert!(!survivors.contains(&4));
/// ```
pub fn select_by_rank_and_density<S: Solution>(
    solutions: &[S],
    count: usize,
    estimator: &DensityEstimator,
    comparator: &DominanceComparator,
) -> Result<Vec<usize>> {
    estimator.validate()?;
    let ranking = Ranking::compute(solutions, comparator)?;
    let population_scores = if estimator.is_population_wide() {
        Some(estimator.compute_density_with(solutions, comparator)?)
    } else {
        None
    };

    let mut selected = Vec::with_capacity(count.min(solutions.len()));
    for front in &ranking.fronts {
        let remaining = count - selected.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            selected.extend(front.iter());
            continue;
        }

        let order: Vec<usize> = match &population_scores {
            Some(scores) => {
                let mut members = front.members.clone();
                let values = scores.values();
                members.sort_by(|&a, &b| scores.preference().compare(values[a], values[b]));
                members
            }
            None => {
                let members: Vec<&S> = front.iter().map(|i| &solutions[i]).collect();
                let scores = estimator.compute_density_with(&members, comparator)?;
                scores
                    .sorted_indices()
                    .into_iter()
                    .map(|pos| front.members[pos])
                    .collect()
            }
        };
        log::debug!(
            "truncating front {} from {} to {} with {}",
            front.rank,
            front.len(),
            remaining,
            estimator.name()
        );
        selected.extend(order.into_iter().take(remaining));
        break;
    }

    Ok(selected)
}

// ============================================================================
// Tests
// ============================================================================
