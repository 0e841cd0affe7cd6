//! Sequential executor: one timed report per selected day

use crate::config::Config;
use crate::error::CliError;
use crate::input::{InputStore, read_input};
use aoc_solver::{DynSolver, LogSink, PartSelection, RunReport, SolverRegistry, TimedRunner, parts_for};
use std::cell::RefCell;
use std::path::PathBuf;

/// A registered day selected for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
}

/// Reports of one day's run
#[derive(Debug)]
pub struct DayReport {
    pub year: u16,
    pub day: u8,
    pub reports: Vec<RunReport>,
}

/// Runs the selected days in (year, day) order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    input_file: Option<PathBuf>,
    selection: PartSelection,
    runner: TimedRunner,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            input_file: config.input_file.clone(),
            selection: config.selection,
            runner: TimedRunner::new(config.layout),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
        }
    }

    /// Registered solvers matching the year/day filters
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: info.parts,
            })
            .collect()
    }

    /// Where the input of a work item is read from
    pub fn input_path(&self, work: &WorkItem) -> PathBuf {
        match &self.input_file {
            Some(path) => path.clone(),
            None => self.inputs.input_path(work.year, work.day),
        }
    }

    /// Work items whose input file does not exist
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8, PathBuf)> {
        work_items
            .iter()
            .map(|w| (w.year, w.day, self.input_path(w)))
            .filter(|(_, _, path)| !path.is_file())
            .collect()
    }

    /// Run every work item in order, writing each report to `sink`
    ///
    /// Stops at the first failing day.
    pub fn execute<S>(&self, work_items: &[WorkItem], sink: &mut S) -> Result<Vec<DayReport>, CliError>
    where
        S: LogSink + ?Sized,
    {
        if self.input_file.is_some() && work_items.len() != 1 {
            return Err(CliError::Config(format!(
                "--input applies to a single day, but {} days match",
                work_items.len()
            )));
        }

        let mut days = Vec::with_capacity(work_items.len());
        for work in work_items {
            let reports = self.run_day(work, sink)?;
            days.push(DayReport {
                year: work.year,
                day: work.day,
                reports,
            });
        }
        Ok(days)
    }

    fn run_day<S>(&self, work: &WorkItem, sink: &mut S) -> Result<Vec<RunReport>, CliError>
    where
        S: LogSink + ?Sized,
    {
        let input = match &self.input_file {
            Some(path) => read_input(path, work.year, work.day)?,
            None => self.inputs.load(work.year, work.day)?,
        };

        let solver = RefCell::new(self.registry.create_solver(work.year, work.day, &input)?);
        tracing::info!(
            year = work.year,
            day = work.day,
            parse_duration = ?solver.borrow().parse_duration(),
            "running solver"
        );

        let parts = parts_for(&solver, self.selection);
        if parts.is_empty() {
            tracing::warn!(year = work.year, day = work.day, "no parts selected");
        }

        self.runner
            .run(parts, sink)
            .map_err(|source| CliError::Run {
                year: work.year,
                day: work.day,
                source,
            })
    }
}
