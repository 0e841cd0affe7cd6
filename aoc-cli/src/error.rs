//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input loading error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Inputs missing for some selected days
    #[error("Missing {0} input file(s)")]
    MissingInputs(usize),

    /// Solver lookup or parse error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// A part failed while running
    #[error("{year}/{day:02} {source}")]
    Run {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::RunError,
    },
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the requested day
    #[error("No input for {year}/day{day:02} at {}", .path.display())]
    NotFound { year: u16, day: u8, path: PathBuf },

    /// Reading the input file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
