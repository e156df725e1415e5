//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Words solver: part 1 counts words, part 2 finds the longest one
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|w| w.len())
            .max()
            .unwrap_or_default()
            .to_string())
    }
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..12).prop_map(|ws| ws.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `Solver::solve_part(N)` gives the same answer as `PartSolver<N>::solve`
    #[test]
    fn solve_part_dispatches_to_part_solver(input in words(), part in 1u8..=2) {
        let mut shared1 = Words::parse(&input).unwrap();
        let mut shared2 = Words::parse(&input).unwrap();

        let dispatched = <Words as Solver>::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <Words as PartSolver<1>>::solve(&mut shared2),
            2 => <Words as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    /// Parts outside 1..=PARTS are reported as not implemented by the derive
    #[test]
    fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = Words::parse("gear ratios").unwrap();

        match <Words as Solver>::solve_part(&mut shared, invalid_part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}

mod mutation {
    use super::*;

    #[derive(Debug, Clone)]
    struct Tally {
        numbers: Vec<u32>,
        cached_sum: Option<u32>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct TallySolver;

    impl AocParser for TallySolver {
        type SharedData<'a> = Tally;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let numbers = input
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect::<Result<_, _>>()?;
            Ok(Tally {
                numbers,
                cached_sum: None,
            })
        }
    }

    impl PartSolver<1> for TallySolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let sum = shared.numbers.iter().sum();
            shared.cached_sum = Some(sum);
            Ok(sum.to_string())
        }
    }

    impl PartSolver<2> for TallySolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok((shared.cached_sum.unwrap_or(0) * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Part 1 leaves its result in the shared data for part 2
        #[test]
        fn part_one_result_visible_to_part_two(numbers in prop::collection::vec(1u32..100, 1..5)) {
            let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
            let expected: u32 = numbers.iter().sum();

            let mut shared = TallySolver::parse(&input).unwrap();

            let part1 = TallySolver::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(part1, expected.to_string());
            prop_assert_eq!(shared.cached_sum, Some(expected));

            let part2 = TallySolver::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(part2, (expected * 2).to_string());
        }
    }
}
