//! Choosing which parts of a day to run

use crate::instance::DynSolver;
use crate::runner::Part;
use std::cell::RefCell;

/// Which of the two puzzle parts are enabled for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSelection {
    pub part1: bool,
    pub part2: bool,
}

impl PartSelection {
    pub const ALL: Self = Self {
        part1: true,
        part2: true,
    };

    pub const NONE: Self = Self {
        part1: false,
        part2: false,
    };

    /// Only the given part; anything but 1 or 2 selects nothing
    pub fn only(part: u8) -> Self {
        Self {
            part1: part == 1,
            part2: part == 2,
        }
    }

    pub fn contains(&self, part: u8) -> bool {
        match part {
            1 => self.part1,
            2 => self.part2,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.part1 && !self.part2
    }

    /// Enabled part numbers a solver with `max_parts` parts can answer, ascending
    pub fn selected(self, max_parts: u8) -> impl Iterator<Item = u8> {
        (1..=max_parts.min(2)).filter(move |p| self.contains(*p))
    }
}

impl Default for PartSelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Build the runner's parts for a parsed solver
///
/// Solvers with a single part yield one unlabeled part; others yield
/// `Part1`/`Part2` labeled parts. The solver is borrowed mutably only while
/// its part is being solved.
pub fn parts_for<'s, D>(solver: &'s RefCell<D>, selection: PartSelection) -> Vec<Part<'s>>
where
    D: DynSolver + ?Sized + 's,
{
    let max_parts = solver.borrow().parts();

    selection
        .selected(max_parts)
        .map(move |part| {
            let solve = move || solver.borrow_mut().solve(part);
            if max_parts == 1 {
                Part::unlabeled(solve)
            } else {
                Part::labeled(format!("Part{}", part), solve)
            }
        })
        .collect()
}
