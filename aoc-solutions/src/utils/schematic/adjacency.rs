//! Adjacency evaluator: decides which numbers touch symbols and which gears
//! have enough neighbours.

use super::interval::Interval;
use super::token::{tokens, Category, Token};

fn is_symbol(c: u8) -> bool {
    Category::classify(c).is_symbol()
}

/// A row together with its neighbours, the unit the evaluator works on.
///
/// `above` is `None` on the first row and `below` is `None` on the last.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub above: Option<&'a [u8]>,
    pub current: &'a [u8],
    pub below: Option<&'a [u8]>,
}

impl<'a> RowContext<'a> {
    pub fn new(above: Option<&'a [u8]>, current: &'a [u8], below: Option<&'a [u8]>) -> Self {
        Self {
            above,
            current,
            below,
        }
    }

    /// Whether any of the eight neighbours of `token` is a symbol.
    ///
    /// Looks at the character just left and just right of the token in the
    /// current row, then at the token's span widened by one column in the
    /// rows above and below.
    pub fn is_adjacent_to_symbol(&self, token: Interval) -> bool {
        let left = token
            .start
            .checked_sub(1)
            .and_then(|i| self.current.get(i))
            .is_some_and(|&c| is_symbol(c));
        let right = self.current.get(token.stop).is_some_and(|&c| is_symbol(c));

        left || right
            || [self.above, self.below]
                .into_iter()
                .flatten()
                .any(|row| token.expand(1, row.len()).slice(row).iter().any(|&c| is_symbol(c)))
    }

    /// Values of every number touching `gear`, or `None` when fewer than two do.
    ///
    /// Numbers are collected from the row above, the row below, then the
    /// current row, each scanned left to right. A gear touching three or more
    /// numbers reports all of them.
    pub fn gear_ratio(&self, gear: Interval) -> Option<Vec<u64>> {
        let window = gear.expand(1, self.current.len());
        let values: Vec<u64> = [self.above, self.below, Some(self.current)]
            .into_iter()
            .flatten()
            .flat_map(|row| {
                tokens(row, Category::Digit)
                    .filter(move |token| token.interval.intersects(&window))
                    .map(move |token| token.value(row))
            })
            .collect();

        (values.len() >= 2).then_some(values)
    }

    /// Numbers of the current row that touch a symbol, left to right.
    pub fn part_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        tokens(self.current, Category::Digit)
            .filter(move |token| self.is_adjacent_to_symbol(token.interval))
            .map(move |token| token.value(self.current))
    }

    /// Neighbour values of every gear in the current row that has at least two.
    pub fn gear_ratios(&self) -> impl Iterator<Item = Vec<u64>> + '_ {
        tokens(self.current, Category::Gear)
            .filter_map(move |Token { interval, .. }| self.gear_ratio(interval))
    }
}
