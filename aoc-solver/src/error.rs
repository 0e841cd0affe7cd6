//! Errors raised while parsing, registering and running solvers

use thiserror::Error;

/// Puzzle input could not be turned into a solver's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    /// Input is well-formed but lacks something the solver needs
    #[error("incomplete input: {0}")]
    MissingData(String),
    #[error("cannot parse input: {0}")]
    Other(String),
}

/// A single part could not produce an answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// Within `PARTS` but the solver has no code for it
    #[error("no solution for part {0}")]
    PartNotImplemented(u8),
    /// Zero or above the solver's `PARTS`
    #[error("part {0} does not exist for this solver")]
    PartOutOfRange(u8),
    #[error("{0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a solve failure
    pub fn failed<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(err.into())
    }
}

/// Looking up or instantiating a registered solver failed
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is not a puzzle day")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("{0}/{1:02} already has a solver")]
    DuplicateSolver(u16, u8),
    #[error("cannot register {0}/{1:02}: not a puzzle day")]
    InvalidYearDay(u16, u8),
}

/// Error returned by the timed runner when a part's solve operation fails
///
/// No timing line is emitted for the failed part or any part after it.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{label} failed: {source}")]
    PartFailed {
        /// "Part1", or "Day" when the part is unlabeled
        label: String,
        #[source]
        source: SolveError,
    },
}
