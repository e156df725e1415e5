//! Day 2: Cube Conundrum

use std::str::FromStr;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

/// Cubes of each colour shown in one draw, or the most of each seen in a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeCounts {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

const LIMITS: CubeCounts = CubeCounts {
    red: 12,
    green: 13,
    blue: 14,
};

impl CubeCounts {
    fn max(self, other: CubeCounts) -> CubeCounts {
        CubeCounts {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn within(&self, limits: &CubeCounts) -> bool {
        self.red <= limits.red && self.green <= limits.green && self.blue <= limits.blue
    }

    /// Product of the non-zero counts; colours never drawn do not contribute.
    fn power(&self) -> u64 {
        [self.red, self.green, self.blue]
            .into_iter()
            .filter(|&count| count > 0)
            .map(u64::from)
            .product()
    }
}

impl FromStr for CubeCounts {
    type Err = anyhow::Error;

    /// Parses one draw, e.g. `3 blue, 4 red`. A colour may be missing; a
    /// repeated colour keeps its largest count.
    fn from_str(draw: &str) -> Result<Self, Self::Err> {
        draw.split(',').try_fold(CubeCounts::default(), |mut counts, entry| {
            let (count, colour) = entry
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected '<count> <colour>', found {:?}", entry.trim()))?;
            let count = count
                .parse::<u32>()
                .with_context(|| format!("invalid cube count {count:?}"))?;
            let slot = match colour.trim() {
                "red" => &mut counts.red,
                "green" => &mut counts.green,
                "blue" => &mut counts.blue,
                other => return Err(anyhow!("unknown colour {other:?}")),
            };
            *slot = (*slot).max(count);
            Ok(counts)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<CubeCounts>,
}

impl Game {
    fn maxima(&self) -> CubeCounts {
        self.draws
            .iter()
            .fold(CubeCounts::default(), |acc, &draw| acc.max(draw))
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_ascii_lowercase();
        let (header, draws) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' after game id"))?;
        let id = header
            .strip_prefix("game")
            .ok_or_else(|| anyhow!("line must start with 'Game'"))?
            .trim()
            .parse::<u32>()
            .context("invalid game id")?;
        let draws = draws
            .split(';')
            .map(CubeCounts::from_str)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Game { id, draws })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let games = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.parse::<Game>()
                    .map_err(|e| ParseError::at_line(line_idx + 1, format!("{e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(games = games.len(), "parsed games");
        Ok(games)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.within(&LIMITS)))
            .map(|game| u64::from(game.id))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|game| game.maxima().power())
            .sum::<u64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.len(), 5);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_parse_game() {
        let game: Game = "GAME 7: 2 Red, 1 blue; 3 GREEN".parse().unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(
            game.draws,
            vec![
                CubeCounts { red: 2, green: 0, blue: 1 },
                CubeCounts { red: 0, green: 3, blue: 0 },
            ]
        );
    }

    #[test]
    fn test_power_skips_missing_colours() {
        let game: Game = "Game 1: 4 red; 5 red".parse().unwrap();
        assert_eq!(game.maxima().power(), 5);
    }

    #[test]
    fn test_repeated_colour_keeps_largest_count() {
        let mut games = Solver::parse("Game 1: 7 red, 7 red\nGame 2: 3 blue, 15 blue, 2 green").unwrap();
        assert_eq!(games[0].draws, [CubeCounts { red: 7, green: 0, blue: 0 }]);
        assert_eq!(Solver::solve_part(&mut games, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut games, 2).unwrap(), "37");
    }

    #[test]
    fn test_huge_repeated_count() {
        let mut games = Solver::parse("Game 1: 4294967295 red, 1 red").unwrap();
        assert_eq!(games[0].maxima().red, u32::MAX);
        assert_eq!(Solver::solve_part(&mut games, 1).unwrap(), "0");
        assert_eq!(
            Solver::solve_part(&mut games, 2).unwrap(),
            u32::MAX.to_string()
        );
    }

    #[test]
    fn test_rejects_unknown_colour() {
        let err = Solver::parse("Game 1: 3 blue\nGame 2: 4 purple\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, reason } if reason.contains("purple")));
    }

    #[test]
    fn test_rejects_bad_count() {
        assert!(Solver::parse("Game 1: x blue").is_err());
        assert!(Solver::parse("Game one: 1 blue").is_err());
        assert!(Solver::parse("Game 1 1 blue").is_err());
    }
}
