//! Dominance comparator implementation.

use std::cmp::Ordering;

use crate::error::{ParetoError, Result};
use crate::solution::Solution;

/// Dominance relation of a left vector relative to a right vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Dominates,
    /// Right dominates left.
    DominatedBy,
    /// Neither dominates the other (this includes equal vectors).
    NonDominated,
}

impl Dominance {
    /// Maps the relation onto an ordering where `Less` means "left is preferred".
    pub fn to_ordering(self) -> Ordering {
        match self {
            Dominance::Dominates => Ordering::Less,
            Dominance::DominatedBy => Ordering::Greater,
            Dominance::NonDominated => Ordering::Equal,
        }
    }
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if the vectors differ in length.
///
/// # Example
///
/// ```
/// use u_pareto::dominance::{pareto_dominance, Dominance};
///
/// assert_eq!(pareto_dominance(&[1.0, 2.0], &[2.0, 2.0]).unwrap(), Dominance::Dominates);
/// assert_eq!(pareto_dominance(&[1.0, 3.0], &[3.0, 1.0]).unwrap(), Dominance::NonDominated);
/// ```
pub fn pareto_dominance(a: &[f64], b: &[f64]) -> Result<Dominance> {
    if a.len() != b.len() {
        return Err(ParetoError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(dominance_unchecked(a, b))
}

/// Dominance on vectors already known to have equal length.
fn dominance_unchecked(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::DominatedBy,
        _ => Dominance::NonDominated,
    }
}

/// Whether `a` strictly Pareto-dominates `b`. Lengths must already agree.
pub(crate) fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Compares two solutions by feasibility only.
///
/// `Less` means `a` is preferred. Two feasible solutions compare `Equal`;
/// between two infeasible ones the violation closer to zero wins.
pub fn compare_constraint_violation<S: Solution + ?Sized>(a: &S, b: &S) -> Ordering {
    let va = a.constraint_violation();
    let vb = b.constraint_violation();
    match (va < 0.0, vb < 0.0) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        // Both negative: the larger value has the smaller magnitude.
        (true, true) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
    }
}

/// Whether two objective vectors are component-wise identical.
pub fn objectives_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Feasibility-then-dominance comparator.
///
/// [`compare`](Self::compare) returns `Less` when `a` is preferred (`-1`),
/// `Greater` when `b` is preferred (`+1`) and `Equal` when the two are
/// mutually non-dominating (`0`).
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use u_pareto::{DominanceComparator, EvaluatedSolution};
///
/// let cmp = DominanceComparator::default();
/// let feasible = EvaluatedSolution::new(vec![9.0, 9.0]);
/// let infeasible = EvaluatedSolution::new(vec![0.0, 0.0]).with_violation(-1.0);
///
/// // Feasibility takes precedence over the objectives.
/// assert_eq!(cmp.compare(&feasible, &infeasible).unwrap(), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominanceComparator {
    /// Whether the feasibility stage runs before Pareto dominance.
    pub constrained: bool,
}

impl Default for DominanceComparator {
    fn default() -> Self {
        Self { constrained: true }
    }
}

impl DominanceComparator {
    /// Creates the default constrained comparator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a comparator that ignores constraint violation.
    pub fn unconstrained() -> Self {
        Self { constrained: false }
    }

    /// Compares two solutions.
    ///
    /// # Errors
    ///
    /// [`ParetoError::DimensionMismatch`] if the objective vectors differ
    /// in length.
    pub fn compare<S: Solution + ?Sized>(&self, a: &S, b: &S) -> Result<Ordering> {
        self.dominance(a, b).map(Dominance::to_ordering)
    }

    /// Like [`compare`](Self::compare), expressed as a [`Dominance`].
    pub fn dominance<S: Solution + ?Sized>(&self, a: &S, b: &S) -> Result<Dominance> {
        let (oa, ob) = (a.objectives(), b.objectives());
        if oa.len() != ob.len() {
            return Err(ParetoError::DimensionMismatch {
                expected: oa.len(),
                actual: ob.len(),
            });
        }

        if self.constrained {
            match compare_constraint_violation(a, b) {
                Ordering::Less => return Ok(Dominance::Dominates),
                Ordering::Greater => return Ok(Dominance::DominatedBy),
                Ordering::Equal => {}
            }
        }

        Ok(dominance_unchecked(oa, ob))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::EvaluatedSolution;

    fn sol(obj: &[f64]) -> EvaluatedSolution {
        EvaluatedSolution::new(obj.to_vec())
    }

    // ---- Pareto dominance ----

    #[test]
    fn test_clear_dominance() {
        assert_eq!(
            pareto_dominance(&[1.0, 1.0], &[2.0, 2.0]).unwrap(),
            Dominance::Dominates
        );
        assert_eq!(
            pareto_dominance(&[2.0, 2.0], &[1.0, 1.0]).unwrap(),
            Dominance::DominatedBy
        );
    }

    #[test]
    fn test_weak_improvement_dominates() {
        // equal in one objective, better in the other
        assert_eq!(
            pareto_dominance(&[1.0, 2.0], &[1.0, 3.0]).unwrap(),
            Dominance::Dominates
        );
        assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
        assert!(!dominates(&[1.0, 3.0], &[1.0, 2.0]));
    }

    #[test]
    fn test_equal_vectors_non_dominated() {
        assert_eq!(
            pareto_dominance(&[2.0, 2.0], &[2.0, 2.0]).unwrap(),
            Dominance::NonDominated
        );
        assert!(!dominates(&[2.0, 2.0], &[2.0, 2.0]));
        assert!(objectives_equal(&[2.0, 2.0], &[2.0, 2.0]));
    }

    #[test]
    fn test_trade_off_non_dominated() {
        assert_eq!(
            pareto_dominance(&[1.0, 5.0], &[5.0, 1.0]).unwrap(),
            Dominance::NonDominated
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            pareto_dominance(&[1.0, 2.0], &[1.0]),
            Err(ParetoError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        let cmp = DominanceComparator::default();
        assert!(cmp.compare(&sol(&[1.0]), &sol(&[1.0, 2.0])).is_err());
    }

    // ---- Constraint handling ----

    #[test]
    fn test_feasible_beats_infeasible() {
        let cmp = DominanceComparator::default();
        let good = sol(&[10.0, 10.0]);
        let bad = sol(&[0.0, 0.0]).with_violation(-0.1);
        assert_eq!(cmp.compare(&good, &bad).unwrap(), Ordering::Less);
        assert_eq!(cmp.compare(&bad, &good).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_smaller_violation_wins() {
        let cmp = DominanceComparator::default();
        let mild = sol(&[5.0, 5.0]).with_violation(-0.5);
        let severe = sol(&[0.0, 0.0]).with_violation(-3.0);
        assert_eq!(cmp.compare(&mild, &severe).unwrap(), Ordering::Less);
        assert_eq!(cmp.compare(&severe, &mild).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_equal_violation_falls_back_to_dominance() {
        let cmp = DominanceComparator::default();
        let a = sol(&[1.0, 1.0]).with_violation(-1.0);
        let b = sol(&[2.0, 2.0]).with_violation(-1.0);
        assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_unconstrained_ignores_violation() {
        let cmp = DominanceComparator::unconstrained();
        let a = sol(&[1.0, 1.0]).with_violation(-5.0);
        let b = sol(&[2.0, 2.0]);
        assert_eq!(cmp.compare(&a, &b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_constraint_violation_ordering() {
        let f1 = sol(&[1.0]);
        let f2 = sol(&[2.0]);
        assert_eq!(compare_constraint_violation(&f1, &f2), Ordering::Equal);
    }

    #[test]
    fn test_dominance_to_ordering() {
        assert_eq!(Dominance::Dominates.to_ordering(), Ordering::Less);
        assert_eq!(Dominance::DominatedBy.to_ordering(), Ordering::Greater);
        assert_eq!(Dominance::NonDominated.to_ordering(), Ordering::Equal);
    }
}
