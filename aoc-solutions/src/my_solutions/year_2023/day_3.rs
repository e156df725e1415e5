//! Day 3: Gear Ratios

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::schematic::Schematic;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Schematic<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Schematic::parse(input)
    }
}

impl PartSolver<1> for Solver {
    /// Sum of every number touching a symbol.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut count = 0usize;
        let total = shared
            .contexts()
            .flat_map(|ctx| ctx.part_numbers().collect::<Vec<_>>())
            .inspect(|_| count += 1)
            .try_fold(0u64, |sum, value| sum.checked_add(value))
            .ok_or(SolveError::Overflow("part number sum"))?;
        debug!(part_numbers = count, "summed part numbers");
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Sum over gears with two or more neighbours of the product of those
    /// neighbours.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears = 0usize;
        let total = shared
            .contexts()
            .flat_map(|ctx| ctx.gear_ratios().collect::<Vec<_>>())
            .try_fold(0u64, |sum, values| {
                gears += 1;
                let power = values
                    .iter()
                    .try_fold(1u64, |product, &value| product.checked_mul(value))
                    .ok_or(SolveError::Overflow("gear power"))?;
                sum.checked_add(power)
                    .ok_or(SolveError::Overflow("gear power sum"))
            })?;
        debug!(gears, "summed gear powers");
        Ok(total.to_string())
    }
}
