//! The schematic grid and its loader.

use aoc_solver::ParseError;
use tracing::debug;

use super::adjacency::RowContext;
use super::token::{find_tokens, Category};
use super::MAX_DIGITS;

/// A validated engine schematic: equal-width rows of ASCII bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic<'a> {
    rows: Vec<&'a [u8]>,
    width: usize,
}

impl<'a> Schematic<'a> {
    /// Split `input` into rows, trimming whitespace around each row.
    ///
    /// Rejects rows of differing width, non-ASCII characters and digit runs
    /// too long for a `u64`. Errors name the 1-based line.
    ///
    /// ```
    /// use aoc_solutions::utils::schematic::Schematic;
    ///
    /// let schematic = Schematic::parse("467..\n...*.\n").unwrap();
    /// assert_eq!((schematic.width(), schematic.height()), (5, 2));
    /// assert!(Schematic::parse("467..\n..*\n").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, ParseError> {
        let rows: Vec<&[u8]> = input
            .trim_end_matches(['\r', '\n'])
            .lines()
            .map(|row| row.trim().as_bytes())
            .collect();
        let width = rows.first().map_or(0, |row| row.len());

        for (index, row) in rows.iter().enumerate() {
            let line = index + 1;
            if !row.is_ascii() {
                return Err(ParseError::at_line(line, "schematic rows must be ASCII"));
            }
            if row.len() != width {
                return Err(ParseError::at_line(
                    line,
                    format!("expected {width} columns, found {}", row.len()),
                ));
            }
            if let Some(run) = find_tokens(row, Category::Digit)
                .into_iter()
                .find(|run| run.len() > MAX_DIGITS)
            {
                return Err(ParseError::at_line(
                    line,
                    format!(
                        "number at column {} has {} digits, at most {MAX_DIGITS} supported",
                        run.start + 1,
                        run.len()
                    ),
                ));
            }
        }

        debug!(width, height = rows.len(), "loaded schematic");
        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> &[&'a [u8]] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row `index` with its neighbours, or `None` past the last row.
    pub fn context(&self, index: usize) -> Option<RowContext<'a>> {
        let current = *self.rows.get(index)?;
        let above = index.checked_sub(1).map(|i| self.rows[i]);
        let below = self.rows.get(index + 1).copied();
        Some(RowContext::new(above, current, below))
    }

    /// Every row context, top to bottom.
    pub fn contexts(&self) -> impl Iterator<Item = RowContext<'a>> + '_ {
        (0..self.height()).filter_map(|index| self.context(index))
    }
}
