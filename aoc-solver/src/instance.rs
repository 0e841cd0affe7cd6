//! Parsed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use std::time::{Duration, Instant};

/// A parsed day: the solver's shared data plus where it came from
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: Duration,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long parsing took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let start = Instant::now();
        let shared = S::parse(input)?;
        let parse_duration = start.elapsed();

        tracing::debug!(year, day, ?parse_duration, "parsed input");

        Ok(Self {
            year,
            day,
            shared,
            parse_duration,
        })
    }
}

/// Type-erased view of a [`SolverInstance`]
///
/// The registry hands these out so the runner can drive any solver type
/// uniformly. Timing of `solve` is the runner's job, not the instance's.
pub trait DynSolver {
    /// Solve the given part (1-based), range-checked against [`DynSolver::parts`]
    fn solve(&mut self, part: u8) -> Result<String, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver supports
    fn parts(&self) -> u8;

    /// Time spent parsing the input when the instance was created
    fn parse_duration(&self) -> Duration;
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<String, SolveError> {
        S::solve_part_checked_range(&mut self.shared, part)
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> Duration {
        self.parse_duration
    }
}

impl<D: DynSolver + ?Sized> DynSolver for Box<D> {
    fn solve(&mut self, part: u8) -> Result<String, SolveError> {
        (**self).solve(part)
    }

    fn year(&self) -> u16 {
        (**self).year()
    }

    fn day(&self) -> u8 {
        (**self).day()
    }

    fn parts(&self) -> u8 {
        (**self).parts()
    }

    fn parse_duration(&self) -> Duration {
        (**self).parse_duration()
    }
}
