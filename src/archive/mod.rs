//! Non-dominated archives.
//!
//! An archive keeps the best trade-offs found during a run. Admission is
//! governed by a [`DominanceComparator`](crate::DominanceComparator): a
//! candidate enters only if no member dominates or duplicates it, and it
//! expels every member it dominates. A bounded archive additionally evicts
//! the least preferred member by density until its capacity holds.
//!
//! # Key Types
//!
//! - [`NonDominatedArchive`]: Unbounded archive
//! - [`BoundedArchive`]: Capacity-bounded archive with density-based eviction
//! - [`ArchiveConfig`]: Capacity, density estimator, comparator and tie-break
//! - [`ArchiveEntry`]: A member with its insertion index and attributes
//!
//! # Concurrency
//!
//! Archives are single-writer; wrap one in a `Mutex` to share it across
//! threads.
//!
//! # References
//!
//! - Knowles & Corne (2000), "Approximating the nondominated front using the
//!   Pareto archived evolution strategy"
//! - Beume, Naujoks & Emmerich (2007), "SMS-EMOA"

mod bounded;
mod config;
mod non_dominated;

pub use bounded::{ArchiveState, BoundedArchive};
pub use config::{ArchiveConfig, TieBreak};
pub use non_dominated::{ArchiveEntry, NonDominatedArchive};
