//! Core trait definitions for evaluated solutions.
//!
//! Solutions are produced and evaluated outside this crate. The core only
//! reads their objective vector and constraint violation through the
//! [`Solution`] trait, and keeps whatever it derives from them (rank,
//! density, hypervolume contribution) in explicit [`Attributes`].

/// An evaluated candidate solution.
///
/// All objectives are **minimized**. The constraint violation follows the
/// usual convention: `0.0` means feasible, a negative value means
/// infeasible, and its magnitude is the severity.
///
/// # Implementing
///
/// ```
/// use u_pareto::Solution;
///
/// #[derive(Clone)]
/// struct Design {
///     genes: Vec<f64>,
///     costs: Vec<f64>,
/// }
///
/// impl Solution for Design {
///     fn objectives(&self) -> &[f64] {
///         &self.costs
///     }
/// }
///
/// let d = Design { genes: vec![0.5], costs: vec![1.0, 2.0] };
/// assert!(d.is_feasible());
/// ```
pub trait Solution {
    /// Objective values, one per objective.
    fn objectives(&self) -> &[f64];

    /// Overall constraint violation degree.
    ///
    /// The default treats every solution as feasible.
    fn constraint_violation(&self) -> f64 {
        0.0
    }

    /// Whether the solution satisfies all constraints.
    fn is_feasible(&self) -> bool {
        self.constraint_violation() >= 0.0
    }

    /// Number of objectives.
    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }
}

impl<S: Solution + ?Sized> Solution for &S {
    fn objectives(&self) -> &[f64] {
        (**self).objectives()
    }

    fn constraint_violation(&self) -> f64 {
        (**self).constraint_violation()
    }
}

impl Solution for [f64] {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl Solution for Vec<f64> {
    fn objectives(&self) -> &[f64] {
        self
    }
}

/// A plain evaluated solution: objective vector plus constraint violation.
///
/// Handy for drivers that keep decision variables elsewhere, and for tests.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedSolution {
    /// Objective values (minimized).
    pub objectives: Vec<f64>,

    /// Overall constraint violation (`0.0` = feasible, negative = infeasible).
    pub constraint_violation: f64,
}

impl EvaluatedSolution {
    /// Creates a feasible solution with the given objectives.
    pub fn new(objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            constraint_violation: 0.0,
        }
    }

    /// Sets the constraint violation.
    pub fn with_violation(mut self, violation: f64) -> Self {
        self.constraint_violation = violation;
        self
    }
}

impl From<Vec<f64>> for EvaluatedSolution {
    fn from(objectives: Vec<f64>) -> Self {
        Self::new(objectives)
    }
}

impl Solution for EvaluatedSolution {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn constraint_violation(&self) -> f64 {
        self.constraint_violation
    }
}

/// Per-solution scores written by the core.
///
/// Valid for one generation only: drivers recompute them every time the
/// population changes. Fields stay `None` until the corresponding
/// computation has run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    /// Index of the non-dominated front (0 = best).
    pub rank: Option<usize>,

    /// Score of the configured density estimator.
    pub density: Option<f64>,

    /// Crowding distance within the solution's front.
    pub crowding_distance: Option<f64>,

    /// Exclusive hypervolume dominated only by this solution.
    pub hypervolume_contribution: Option<f64>,
}

impl Attributes {
    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
