//! Advent of Code Solver Library
//!
//! Traits for writing day solvers, a registry that collects them, and a
//! timed runner that executes their parts and prints a fixed-layout report.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     parts_for, AocParser, ParseError, PartSelection, SolveError, Solver, SolverInstance,
//!     TimedRunner,
//! };
//! use std::cell::RefCell;
//!
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let solver = RefCell::new(SolverInstance::<Day1>::new(2023, 1, "1\n5\n3").unwrap());
//! let mut lines: Vec<String> = Vec::new();
//! let reports = TimedRunner::default()
//!     .run(parts_for(&solver, PartSelection::ALL), &mut lines)
//!     .unwrap();
//!
//! assert_eq!(reports[0].result_text, "9");
//! assert_eq!(reports[1].result_text, "5");
//! assert_eq!(lines.first().unwrap(), ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>");
//! ```
//!
//! # Plugin registration
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//!
//! `AocSolver` generates the [`Solver`] impl from `PartSolver<1>`,
//! `PartSolver<2>`, ...; `AutoRegisterSolver` submits a [`SolverPlugin`] that
//! [`RegistryBuilder::register_all_plugins`] picks up.

mod error;
mod instance;
mod registry;
mod runner;
mod selection;
mod sink;
mod solver;

pub use error::{ParseError, RegistrationError, RunError, SolveError, SolverError};
pub use instance::{DynSolver, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use runner::{
    END_BANNER, Part, RESULTS_BANNER, ReportLayout, RunReport, SEPARATOR, SolveFn, TOP_BANNER,
    TimedRunner, TimingStyle,
};
pub use selection::{PartSelection, parts_for};
pub use sink::{ConsoleSink, LogSink};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
