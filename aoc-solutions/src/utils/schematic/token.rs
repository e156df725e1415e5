//! Token finder: digit runs and symbol positions within a row.

use super::interval::Interval;

/// Background character, never a symbol.
pub const DEADSPACE: u8 = b'.';
/// The only symbol that can act as a gear.
pub const GEAR: u8 = b'*';

/// Character classes a schematic row is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// ASCII `0`-`9`
    Digit,
    /// Anything that is neither a digit nor deadspace
    Symbol,
    /// The `*` symbol
    Gear,
    /// Deadspace
    Other,
}

impl Category {
    pub fn classify(c: u8) -> Self {
        match c {
            b'0'..=b'9' => Category::Digit,
            DEADSPACE => Category::Other,
            GEAR => Category::Gear,
            _ => Category::Symbol,
        }
    }

    /// Gears count as symbols too.
    pub fn is_symbol(self) -> bool {
        matches!(self, Category::Symbol | Category::Gear)
    }

    /// Whether `c` belongs to the class this category selects when scanning.
    fn selects(self, c: u8) -> bool {
        let found = Category::classify(c);
        match self {
            Category::Symbol => found.is_symbol(),
            _ => found == self,
        }
    }

    /// Digit and deadspace runs are merged; every symbol is its own token.
    fn merges_runs(self) -> bool {
        matches!(self, Category::Digit | Category::Other)
    }
}

/// A classified interval of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub interval: Interval,
    pub category: Category,
}

impl Token {
    /// Integer value of a digit token read from `row`.
    pub fn value(&self, row: &[u8]) -> u64 {
        digit_value(row, self.interval)
    }
}

/// Scan `row` left to right for tokens of `target`.
///
/// ```
/// use aoc_solutions::utils::schematic::{find_tokens, Category, Interval};
///
/// let row = b"617*..#*.58";
/// assert_eq!(
///     find_tokens(row, Category::Digit),
///     vec![Interval::new(0, 3), Interval::new(9, 11)],
/// );
/// assert_eq!(
///     find_tokens(row, Category::Symbol),
///     vec![Interval::new(3, 4), Interval::new(6, 7), Interval::new(7, 8)],
/// );
/// assert_eq!(
///     find_tokens(row, Category::Gear),
///     vec![Interval::new(3, 4), Interval::new(7, 8)],
/// );
/// ```
pub fn find_tokens(row: &[u8], target: Category) -> Vec<Interval> {
    tokens(row, target).map(|token| token.interval).collect()
}

/// Iterator form of [`find_tokens`] yielding classified [`Token`]s.
pub fn tokens(row: &[u8], target: Category) -> impl Iterator<Item = Token> + '_ {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        let start = cursor + row.get(cursor..)?.iter().position(|&c| target.selects(c))?;
        let stop = if target.merges_runs() {
            row[start..]
                .iter()
                .position(|&c| !target.selects(c))
                .map_or(row.len(), |len| start + len)
        } else {
            start + 1
        };
        cursor = stop;
        Some(Token {
            interval: Interval::new(start, stop),
            category: target,
        })
    })
}

/// Integer formed by the digits of `row` inside `interval`.
///
/// Runs longer than `u64` can hold are rejected when the schematic is loaded,
/// see [`super::MAX_DIGITS`].
pub fn digit_value(row: &[u8], interval: Interval) -> u64 {
    interval
        .slice(row)
        .iter()
        .fold(0, |acc, &c| acc * 10 + u64::from(c - b'0'))
}
