//! Non-dominated ranking.
//!
//! Partitions a population into ordered fronts: front 0 holds the
//! solutions no one dominates, front 1 those dominated only by front 0,
//! and so on. Every solution lands in exactly one front.
//!
//! # Key Types
//!
//! - [`Ranking`]: Ranks per solution plus the fronts in rank order
//! - [`Front`]: Member indices of one rank, in ascending input order
//!
//! # Functions
//!
//! - [`non_dominated_sort`]: Ranking of raw objective vectors (no constraints)
//! - [`pareto_front`]: Indices of the non-dominated subset only
//! - [`assign_attributes`]: Rank plus per-front density for every solution
//! - [`select_by_rank_and_density`]: NSGA-II style environmental replacement
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod selection;
mod sort;

pub use selection::{assign_attributes, select_by_rank_and_density};
pub use sort::{non_dominated_sort, pareto_front, Front, Ranking};
