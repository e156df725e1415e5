//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::{ExpectedAnswers, InputStore};
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Outcome of comparing an answer with the recorded one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Correct,
    Incorrect { expected: String },
}

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Parse time, reported on the first part solved from a given parse
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    /// `None` when no expected answer is recorded for this part
    pub verification: Option<Verification>,
}

impl SolverResult {
    /// Error result carrying no timing information
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
            verification: None,
        }
    }

    /// Compare the answer against `expected`, if both exist
    fn verify(mut self, expected: &ExpectedAnswers) -> Self {
        if let (Ok(answer), Some(expected)) = (&self.answer, expected.get(self.part)) {
            self.verification = Some(if answer == expected {
                Verification::Correct
            } else {
                warn!(
                    year = self.year,
                    day = self.day,
                    part = self.part,
                    %answer,
                    %expected,
                    "answer differs from expected"
                );
                Verification::Incorrect {
                    expected: expected.to_string(),
                }
            });
        }
        self
    }
}

/// One registered puzzle and the parts to run for it
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    ctx: RunContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread reads while running work items
struct RunContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            ctx: RunContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.ctx.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.ctx;
        ctx.registry
            .storage()
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.ctx.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            work_items = work_items.len(),
            mode = ?self.ctx.parallelize_by,
            "starting execution"
        );

        match self.ctx.parallelize_by {
            ParallelizeBy::Sequential => ArcExecutorError::gather(
                work_items
                    .iter()
                    .filter_map(|work| run_work_item(work, &tx, &self.ctx).err()),
            ),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits each work item in run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let ctx = &self.ctx;

        let errors: Vec<_> = self.thread_pool.install(|| {
            work_items
                .par_iter()
                .filter_map(|work| run_work_item(work, tx, ctx).err())
                .collect()
        });
        ArcExecutorError::gather(errors)
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let ctx = &self.ctx;

        // Days of one year run in order on a single worker
        let errors: Vec<_> = self.thread_pool.install(|| {
            groups
                .par_iter()
                .flat_map_iter(|items| {
                    items
                        .iter()
                        .filter_map(|work| run_work_item(work, tx, ctx).err())
                })
                .collect()
        });
        ArcExecutorError::gather(errors)
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same error as the result of every part of `work`
fn send_failed_parts(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Read the input for one work item and solve its parts
///
/// Input and parse failures become error results for every part, so one bad
/// day never stops the run. Only channel failures are returned.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let inputs = &ctx.inputs;

    let input = match inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year, day, error = %source, "input unavailable");
            let error = ExecutorError::InputRead { year, day, source }.into();
            return send_failed_parts(work, tx, error);
        }
    };

    let expected = inputs.expected_answers(year, day).unwrap_or_else(|e| {
        warn!(year, day, error = %e, "ignoring unreadable answers file");
        ExpectedAnswers::default()
    });

    if matches!(ctx.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, &expected, tx, ctx)
    } else {
        run_solver_sequential(work, &input, &expected, tx, ctx)
    }
}

/// Solve each part on its own parse, in parallel
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    expected: &ExpectedAnswers,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let registry = &ctx.registry;

    work.parts.clone().into_par_iter().try_for_each(|part| {
        let result = match registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(&mut *solver, part, true),
            Err(e) => SolverResult::failed(year, day, part, ExecutorError::Solver(e).into()),
        };
        send(tx, result.verify(expected))
    })
}

/// Parse once, then solve the parts in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    expected: &ExpectedAnswers,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match ctx.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            debug!(year, day, error = %e, "solver creation failed");
            return send_failed_parts(work, tx, ExecutorError::Solver(e).into());
        }
    };

    for (index, part) in work.parts.clone().enumerate() {
        send(tx, solve_part(&mut *solver, part, index == 0).verify(expected))?;
    }
    Ok(())
}

/// Solve a single part, optionally attributing the solver's parse time to it
fn solve_part(solver: &mut dyn DynSolver, part: u8, report_parse: bool) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = report_parse.then(|| solver.parse_duration());

    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
            verification: None,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(year, day, part, ExecutorError::Solver(SolverError::from(e)).into())
        },
    }
}
