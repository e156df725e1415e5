//! Memoised evaluation over an acyclic dependency graph
//!
//! A [`DpProblem`] names, for each index, the indices its value is built from
//! and how to combine their values. [`DpCache`] resolves those dependencies on
//! demand and stores every value in a [`Backend`] so it is computed once.
//!
//! A `(deps, compute)` pair of closures is itself a [`DpProblem`], which is
//! usually all a one-off recurrence needs:
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! // Lattice paths to (r, c) moving only down or right
//! let paths = DpCache::new(
//!     HashMapBackend::new(),
//!     (
//!         |&(r, c): &(usize, usize)| {
//!             let mut deps = Vec::new();
//!             if r > 0 {
//!                 deps.push((r - 1, c));
//!             }
//!             if c > 0 {
//!                 deps.push((r, c - 1));
//!             }
//!             deps
//!         },
//!         |_: &(usize, usize), from: &[u64]| from.iter().sum::<u64>().max(1),
//!     ),
//! );
//!
//! assert_eq!(paths.get(&(4, 4)), 70);
//! ```
//!
//! Cycles are not detected; a cyclic graph recurses until the stack overflows.

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
