//! Core solver traits
//!
//! A day solver parses its puzzle input once into `SharedData`, then answers
//! each part against that data. Parts get mutable access so that work done
//! for part 1 can be reused by part 2.

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part of a day
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// Borrowing from the input (`&'a str`) is allowed.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Used together with `#[derive(AocSolver)]`, which generates the
/// [`Solver`] impl that dispatches part numbers to these impls.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day solver
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut data = Sums::parse("2 3 4").unwrap();
/// assert_eq!(Sums::solve_part(&mut data, 2).unwrap(), "24");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part. Part numbers start at 1.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked access to [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Rejects part 0 and parts above `PARTS` with [`SolveError::PartOutOfRange`]
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
