//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// Some runs failed or produced answers that differ from the expected ones
    #[error("{failed} part(s) failed, {mismatched} answer(s) did not match")]
    Unsuccessful { failed: usize, mismatched: usize },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be read
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver creation or execution failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// The individual errors this one stands for, with `Multiple` unpacked
    pub fn into_errors(self) -> Vec<ArcExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(errors) => {
                errors.iter().cloned().flat_map(Self::into_errors).collect()
            }
            _ => vec![self],
        }
    }

    /// `Ok` when `errors` is empty, the error itself when there is one,
    /// otherwise a flat `Multiple` in the order given
    pub fn gather(
        errors: impl IntoIterator<Item = ArcExecutorError>,
    ) -> Result<(), ArcExecutorError> {
        let mut errors: Vec<_> = errors.into_iter().flat_map(Self::into_errors).collect();
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ExecutorError::Multiple(errors).into()),
        }
    }
}

/// Input-file errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected location
    #[error("input file not found: {}", .0.display())]
    Missing(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(n: u8) -> ArcExecutorError {
        ExecutorError::ThreadPool(n.to_string()).into()
    }

    fn count(result: Result<(), ArcExecutorError>) -> usize {
        result.err().map_or(0, |e| e.into_errors().len())
    }

    #[test]
    fn test_gather_nothing_is_ok() {
        assert!(ArcExecutorError::gather(Vec::new()).is_ok());
    }

    #[test]
    fn test_gather_single_is_unwrapped() {
        let err = ArcExecutorError::gather([single(7)]).unwrap_err();
        assert_eq!(err.to_string(), "Thread pool creation failed: 7");
    }

    #[test]
    fn test_gather_flattens_nested() {
        let inner = ArcExecutorError::gather([single(1), single(2)]).unwrap_err();
        assert_eq!(inner.to_string(), "Multiple errors occurred (2 total)");

        let outer = ArcExecutorError::gather([single(0), inner, single(3)]);
        let order: Vec<String> = outer
            .unwrap_err()
            .into_errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            order,
            ["0", "1", "2", "3"].map(|n| format!("Thread pool creation failed: {n}"))
        );
    }

    #[test]
    fn test_gather_counts() {
        assert_eq!(count(ArcExecutorError::gather((0..5).map(single))), 5);
    }

    #[test]
    fn test_input_error_messages() {
        let err = ExecutorError::InputRead {
            year: 2023,
            day: 3,
            source: InputError::Missing(PathBuf::from("/inputs/2023_day03.txt")),
        };
        assert_eq!(
            err.to_string(),
            "Input unavailable for 2023/03: input file not found: /inputs/2023_day03.txt"
        );
    }
}
