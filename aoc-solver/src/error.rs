//! Errors raised while parsing, solving and registering puzzles

use std::error::Error as StdError;
use thiserror::Error;

/// Puzzle input that a parser could not accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input as a whole has the wrong shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A specific line (1-based) is malformed
    #[error("Invalid input on line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// Something the puzzle needs is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl ParseError {
    pub fn at_line(line: usize, reason: impl ToString) -> Self {
        ParseError::InvalidLine {
            line,
            reason: reason.to_string(),
        }
    }
}

/// Failure while producing the answer for one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver has no implementation for this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An intermediate value no longer fits in `u64`
    #[error("{0} overflows u64")]
    Overflow(&'static str),
    /// Any other solver-specific failure
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn StdError + Send + Sync>),
}

impl SolveError {
    /// Wrap an arbitrary error (for example an `anyhow::Error`) as [`SolveError::SolveFailed`]
    pub fn failed(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        SolveError::SolveFailed(error.into())
    }
}

/// Error from looking up, parsing or running a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    /// Nothing registered for this year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside of the supported range
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside of the supported range
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_errors_name_the_line() {
        let err = ParseError::at_line(3, "expected 10 columns, found 9");
        assert_eq!(
            err.to_string(),
            "Invalid input on line 3: expected 10 columns, found 9"
        );
    }

    #[test]
    fn test_solve_error_messages() {
        assert_eq!(SolveError::Overflow("gear power").to_string(), "gear power overflows u64");
        let failed = SolveError::failed("no digit on line 2");
        assert_eq!(failed.to_string(), "Solve failed: no digit on line 2");
        assert!(failed.source().is_some());
    }

    #[test]
    fn test_solver_error_wraps_causes() {
        let err = SolverError::from(ParseError::MissingData("no rows".into()));
        assert_eq!(err.to_string(), "Parse error: Missing data: no rows");
        let err = SolverError::from(SolveError::PartOutOfRange(3));
        assert_eq!(err.to_string(), "Solve error: Part 3 is out of range");
    }
}
