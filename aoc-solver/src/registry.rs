//! Year/day lookup table of solver factories

use std::ops::RangeInclusive;

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use tracing::{debug, trace};

/// Years the table has room for
pub const YEARS: RangeInclusive<u16> = 2015..=2034;
/// Puzzle days within a year
pub const DAYS: RangeInclusive<u8> = 1..=25;

const DAYS_PER_YEAR: usize = *DAYS.end() as usize;
const SLOTS: usize = (*YEARS.end() - *YEARS.start() + 1) as usize * DAYS_PER_YEAR;

/// Position of a (year, day) pair in the flat table
///
/// Slots are ordered by year, then day, so walking the table front to back
/// visits puzzles chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Slot(usize);

impl Slot {
    fn of(year: u16, day: u8) -> Option<Slot> {
        if !YEARS.contains(&year) || !DAYS.contains(&day) {
            return None;
        }
        let year_offset = usize::from(year - YEARS.start());
        Some(Slot(year_offset * DAYS_PER_YEAR + usize::from(day - 1)))
    }

    fn key(self) -> (u16, u8) {
        let year = YEARS.start() + (self.0 / DAYS_PER_YEAR) as u16;
        let day = (self.0 % DAYS_PER_YEAR) as u8 + 1;
        (year, day)
    }
}

/// Parses an input into a solver ready to answer parts
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without parsing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Parts the solver answers, numbered from 1
    pub parts: u8,
}

struct Registered {
    factory: SolverFactory,
    parts: u8,
}

/// Collects factories before freezing them into a [`SolverRegistry`]
///
/// Each registration consumes the builder and hands it back, so calls chain
/// with `?`. A (year, day) pair can be registered once, and only within
/// [`YEARS`] and [`DAYS`].
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Width;
///
/// impl AocParser for Width {
///     type SharedData<'a> = Vec<&'a str>;
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Width {
///     const PARTS: u8 = 1;
///     fn solve_part(rows: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(rows.first().map_or(0, |row| row.len()).to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Width>(2023, 3)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2023, 3, "467..114..\n...*......").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "10");
/// ```
pub struct SolverRegistryBuilder {
    table: Vec<Option<Registered>>,
    count: usize,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            table: std::iter::repeat_with(|| None).take(SLOTS).collect(),
            count: 0,
        }
    }

    /// Register a hand-written factory answering `parts` parts
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let Slot(index) =
            Slot::of(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let slot = &mut self.table[index];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        *slot = Some(Registered {
            factory: Box::new(factory),
            parts,
        });
        self.count += 1;
        debug!(year, day, parts, "registered solver");
        Ok(self)
    }

    /// Register `S`, parsing with [`AocParser::parse`](crate::AocParser::parse)
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance: Box<dyn DynSolver + '_> =
                Box::new(SolverInstance::<S>::new(year, day, input)?);
            Ok(instance)
        })
    }

    /// Register every solver submitted through `inventory`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the submitted solvers `keep` accepts
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let grids = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(self, keep: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .filter(|plugin| {
                let kept = keep(plugin);
                trace!(year = plugin.year, day = plugin.day, kept, "plugin");
                kept
            })
            .try_fold(self, |builder, plugin| {
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                table: self.table,
                count: self.count,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen factory table with constant-time lookup
pub struct SolverFactoryStorage {
    table: Vec<Option<Registered>>,
    count: usize,
}

impl SolverFactoryStorage {
    fn entry(&self, year: u16, day: u8) -> Option<&Registered> {
        let Slot(index) = Slot::of(year, day)?;
        self.table[index].as_ref()
    }

    /// Registered puzzles in chronological order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.table.iter().enumerate().filter_map(|(index, entry)| {
            let (year, day) = Slot(index).key();
            entry.as_ref().map(|entry| FactoryInfo {
                year,
                day,
                parts: entry.parts,
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.entry(year, day).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entry(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Read-only registry handing out parsed solvers
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// Fails with [`SolverError::InvalidYearDay`] outside the table,
    /// [`SolverError::NotFound`] for an empty slot, and
    /// [`SolverError::ParseError`] when the solver rejects the input.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if Slot::of(year, day).is_none() {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .storage
            .entry(year, day)
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((entry.factory)(input)?)
    }
}

/// Type-erased handle through which a plugin registers its solver
///
/// [`Solver`] has associated types and so cannot sit behind `dyn`; every
/// `Solver` gets this trait for free, which is what [`SolverPlugin`] stores.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration
///
/// `#[derive(AutoRegisterSolver)]` emits these; writing one by hand works too:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Blank;
///
/// impl AocParser for Blank {
///     type SharedData<'a> = usize;
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().filter(|l| l.trim().is_empty()).count())
///     }
/// }
///
/// impl Solver for Blank {
///     const PARTS: u8 = 1;
///     fn solve_part(blank: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(blank.to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2022,
///         day: 1,
///         solver: &Blank,
///         tags: &["2022", "text"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels the CLI can filter on
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
