//! Puzzle solutions, one module per event year.

pub mod year_2023;
