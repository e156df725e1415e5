//! Local puzzle inputs and expected answers

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads puzzle files from a single directory
///
/// Directory structure:
/// - `{dir}/{year}_day{day:02}.txt`: puzzle input
/// - `{dir}/{year}_day{day:02}.answers`: optional, line `k` is the expected
///   answer for part `k`; blank lines leave a part unchecked
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Get the expected-answers path for a specific year/day
    pub fn answers_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.answers", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the puzzle input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Read { path, source },
        })
    }

    /// Read expected answers for a year/day; a missing file means none are known
    pub fn expected_answers(&self, year: u16, day: u8) -> Result<ExpectedAnswers, InputError> {
        let path = self.answers_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(ExpectedAnswers::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ExpectedAnswers::default()),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}

/// Known answers for one year/day, indexed by part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedAnswers(Vec<Option<String>>);

impl ExpectedAnswers {
    fn parse(content: &str) -> Self {
        Self(
            content
                .lines()
                .map(str::trim)
                .map(|line| (!line.is_empty()).then(|| line.to_string()))
                .collect(),
        )
    }

    /// Expected answer for `part` (1-based), if recorded
    pub fn get(&self, part: u8) -> Option<&str> {
        let index = usize::from(part).checked_sub(1)?;
        self.0.get(index)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(store.input_path(2023, 3), PathBuf::from("/inputs/2023_day03.txt"));
        assert_eq!(store.answers_path(2023, 25), PathBuf::from("/inputs/2023_day25.answers"));
    }

    #[test]
    fn test_read_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 1));
        assert!(matches!(store.read(2023, 1), Err(InputError::Missing(_))));

        let input = "467..114..\n...*......\n";
        fs::write(store.input_path(2023, 1), input).unwrap();
        assert!(store.contains(2023, 1));
        assert_eq!(store.read(2023, 1).unwrap(), input);
    }

    #[test]
    fn test_expected_answers() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let none = store.expected_answers(2023, 3).unwrap();
        assert_eq!(none.get(1), None);

        fs::write(store.answers_path(2023, 3), "4361\n  467835  \n").unwrap();
        let answers = store.expected_answers(2023, 3).unwrap();
        assert_eq!(answers.get(0), None);
        assert_eq!(answers.get(1), Some("4361"));
        assert_eq!(answers.get(2), Some("467835"));
        assert_eq!(answers.get(3), None);
    }

    #[test]
    fn test_blank_line_leaves_part_unchecked() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::write(store.answers_path(2023, 4), "\n30\n").unwrap();
        let answers = store.expected_answers(2023, 4).unwrap();
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), Some("30"));
    }
}
