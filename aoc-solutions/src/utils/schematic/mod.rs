//! Engine schematic scanning.
//!
//! A schematic is a grid of digits, `.` deadspace and symbols. The pieces
//! here find numbers and symbols in a row ([`find_tokens`]), compare column
//! spans ([`intersects`]) and evaluate a row against its neighbours
//! ([`RowContext`]). Everything works on ASCII bytes.

mod adjacency;
mod grid;
mod interval;
mod token;

pub use adjacency::RowContext;
pub use grid::Schematic;
pub use interval::{intersects, Interval};
pub use token::{digit_value, find_tokens, tokens, Category, Token, DEADSPACE, GEAR};

/// Longest digit run whose value always fits a `u64`.
pub const MAX_DIGITS: usize = 19;
