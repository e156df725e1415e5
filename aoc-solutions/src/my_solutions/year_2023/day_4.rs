//! Day 4: Scratchcards

use std::collections::HashSet;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::dp_cache::{DpCache, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "dp"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub actual: Vec<u32>,
}

impl Card {
    /// Number of distinct actual numbers that are also winning numbers.
    pub fn matches(&self) -> usize {
        let winning: HashSet<u32> = self.winning.iter().copied().collect();
        let actual: HashSet<u32> = self.actual.iter().copied().collect();
        winning.intersection(&actual).count()
    }
}

fn parse_numbers(numbers: &str) -> anyhow::Result<Vec<u32>> {
    numbers
        .split_whitespace()
        .map(|n| n.parse::<u32>().with_context(|| format!("invalid number {n:?}")))
        .collect()
}

fn parse_card(line: &str) -> anyhow::Result<Card> {
    let line = line.trim().to_ascii_lowercase();
    let (header, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after card id"))?;
    let id = header
        .strip_prefix("card")
        .ok_or_else(|| anyhow!("line must start with 'Card'"))?
        .trim()
        .parse::<u32>()
        .context("invalid card id")?;
    let (winning, actual) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' between winning and actual numbers"))?;
    Ok(Card {
        id,
        winning: parse_numbers(winning)?,
        actual: parse_numbers(actual)?,
    })
}

#[derive(Debug)]
pub struct Scratchcards {
    cards: Vec<Card>,
    matches: Option<Vec<usize>>,
}

impl Scratchcards {
    /// Match counts per card, computed once and shared by both parts.
    fn matches(&mut self) -> &[usize] {
        let cards = &self.cards;
        self.matches
            .get_or_insert_with(|| cards.iter().map(Card::matches).collect())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Scratchcards;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cards = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_card(line).map_err(|e| ParseError::at_line(line_idx + 1, format!("{e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(cards = cards.len(), "parsed scratchcards");
        Ok(Scratchcards {
            cards,
            matches: None,
        })
    }
}

impl PartSolver<1> for Solver {
    /// A card with `n > 0` matches is worth `2^(n-1)` points.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .matches()
            .iter()
            .filter(|&&n| n > 0)
            .try_fold(0u64, |sum, &n| {
                u32::try_from(n - 1)
                    .ok()
                    .and_then(|shift| 1u64.checked_shl(shift))
                    .and_then(|points| sum.checked_add(points))
            })
            .map(|sum| sum.to_string())
            .ok_or(SolveError::Overflow("card points"))
    }
}

impl PartSolver<2> for Solver {
    /// Total cards held once every won copy has been processed.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let matches = shared.matches();
        let last = matches.len().saturating_sub(1);

        // copies(i) = 1 + sum of copies(j) for the n_i cards after i
        let cache = DpCache::new(
            VecBackend::with_len(matches.len()),
            (
                |&i: &usize| ((i + 1)..=(i + matches[i]).min(last)).collect::<Vec<_>>(),
                |_: &usize, won: &[Option<u64>]| {
                    won.iter()
                        .try_fold(1u64, |total, &copies| total.checked_add(copies?))
                },
            ),
        );

        // Resolve from the back so recursion depth stays bounded by one card
        (0..matches.len())
            .rev()
            .try_fold(0u64, |total, i| total.checked_add(cache.get(&i)?))
            .map(|total| total.to_string())
            .ok_or(SolveError::Overflow("card count"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const SAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "30");
    }

    #[test]
    fn test_match_counts_cached() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert!(shared.matches.is_none());
        assert_eq!(shared.matches(), &[4, 2, 2, 1, 0, 0]);
        assert!(shared.matches.is_some());
    }

    #[test]
    fn test_duplicate_numbers_match_once() {
        let card = parse_card("Card 9: 5 5 7 | 5 5 5 8").unwrap();
        assert_eq!(card.id, 9);
        assert_eq!(card.matches(), 1);
    }

    #[test]
    fn test_wins_clip_to_table() {
        // Card 2 claims two wins but is the last card
        let mut shared = Solver::parse("Card 1: 1 | 1\nCard 2: 2 3 | 2 3\n").unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn test_empty_table() {
        let mut shared = Solver::parse("").unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_malformed_card() {
        let err = Solver::parse("Card 1: 1 2 3\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 1, reason } if reason.contains("'|'")));
        assert!(Solver::parse("Card 1: 1 x | 3\n").is_err());
    }
}
