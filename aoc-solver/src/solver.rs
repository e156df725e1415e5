//! Parsing and solving traits every puzzle implements

use crate::error::{ParseError, SolveError};

/// Turns the raw puzzle input into the data every part works from
///
/// `SharedData` may borrow from the input, so a parser can hand out row
/// slices without copying:
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Rows;
///
/// impl AocParser for Rows {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
///         if rows.is_empty() {
///             return Err(ParseError::MissingData("no rows".into()));
///         }
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Rows::parse("467..114..\n...*......\n").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus anything parts want to cache for each other
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle
///
/// The part number lives in the type, so `#[derive(AocSolver)]` can only
/// dispatch to parts that actually exist.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Readings;
///
/// impl AocParser for Readings {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, l)| l.parse().map_err(|e| ParseError::at_line(i + 1, e)))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Readings {
///     fn solve(readings: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(readings.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut readings = Readings::parse("199\n200\n208\n200").unwrap();
/// assert_eq!(<Readings as PartSolver<1>>::solve(&mut readings).unwrap(), "2");
/// assert!(Readings::parse("199\nx").is_err());
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Answer this part; `shared` is mutable so parts can leave results for
    /// later ones
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch over a puzzle's parts
///
/// `#[derive(AocSolver)]` writes this from the [`PartSolver`] impls. A hand
/// implementation suits puzzles whose parts share one code path:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Fold;
///
/// impl AocParser for Fold {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Fold {
///     const PARTS: u8 = 2;
///
///     fn solve_part(values: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         let folded = match part {
///             1 => values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v)),
///             2 => values.iter().try_fold(1u64, |acc, &v| acc.checked_mul(v)),
///             _ => return Err(SolveError::PartNotImplemented(part)),
///         };
///         folded
///             .map(|v| v.to_string())
///             .ok_or(SolveError::Overflow("fold"))
///     }
/// }
///
/// let mut values = Fold::parse("451 592").unwrap();
/// assert_eq!(Fold::solve_part(&mut values, 1).unwrap(), "1043");
/// assert_eq!(Fold::solve_part(&mut values, 2).unwrap(), "266992");
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer `part`, or `PartNotImplemented` when there is no such part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked dispatch used by [`crate::SolverInstance`]
pub trait SolverExt: Solver {
    /// `PartOutOfRange` for `0` and anything above [`Solver::PARTS`]
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            0 => Err(SolveError::PartOutOfRange(part)),
            p if p > Self::PARTS => Err(SolveError::PartOutOfRange(part)),
            p => Self::solve_part(shared, p),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
