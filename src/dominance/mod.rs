//! Pairwise dominance comparison.
//!
//! Every ranking, density and archive decision in this crate reduces to the
//! comparison of two solutions:
//!
//! 1. **Feasibility**: a feasible solution beats an infeasible one; between
//!    two infeasible solutions the smaller violation magnitude wins.
//! 2. **Pareto dominance** on the objectives (minimization).
//! 3. Otherwise the pair is mutually non-dominating.
//!
//! # Key Types
//!
//! - [`DominanceComparator`]: The configurable comparator (constrained by default)
//! - [`Dominance`]: Outcome of a dominance test between two objective vectors
//!
//! # References
//!
//! - Deb (2000), "An efficient constraint handling method for genetic algorithms"
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod comparator;

pub use comparator::{
    compare_constraint_violation, objectives_equal, pareto_dominance, Dominance,
    DominanceComparator,
};

pub(crate) use comparator::dominates;
