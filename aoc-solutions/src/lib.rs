//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under [`my_solutions`], one module per year, and register
//! themselves with the solver framework through `#[derive(AutoRegisterSolver)]`.
//! Reusable building blocks (memoisation, the engine schematic scanner) live
//! under [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
