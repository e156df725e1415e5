//! Day 1: Trebuchet?!

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "parsing"])]
pub struct Solver;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        debug!(lines = lines.len(), "parsed calibration document");
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration_values(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration_values(shared, true)
    }
}

/// Digit starting at `line[index]`, either as a character or, when `spelled`
/// is set, as a word. Words may overlap, so `twone` yields 2 at index 0 and 1
/// at index 2.
fn digit_at(line: &[u8], index: usize, spelled: bool) -> Option<u32> {
    let c = line[index];
    if c.is_ascii_digit() {
        return Some(u32::from(c - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .position(|word| line[index..].starts_with(word.as_bytes()))
        .map(|position| position as u32 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let bytes = line.as_bytes();
    let mut digits = (0..bytes.len()).filter_map(|index| digit_at(bytes, index, spelled));
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn sum_calibration_values(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .try_fold(0u64, |sum, (line_idx, line)| {
            calibration_value(line, spelled)
                .map(|value| sum + u64::from(value))
                .ok_or_else(|| anyhow!("(line {}) no digit in {:?}", line_idx + 1, line))
        })
        .map(|sum| sum.to_string())
        .map_err(SolveError::failed)
}
