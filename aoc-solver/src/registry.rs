//! Registered solvers keyed by puzzle day
//!
//! Puzzle days live in a fixed table of slots, one per (year, day) from
//! 2015/01 to 2034/25, so iteration order is calendar order.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::ops::RangeInclusive;

const YEARS: RangeInclusive<u16> = 2015..=2034;
const DAYS: RangeInclusive<u8> = 1..=25;
const DAYS_IN_YEAR: usize = 25;
const SLOTS: usize = 20 * DAYS_IN_YEAR;

/// Table slot of a puzzle day
fn slot(year: u16, day: u8) -> Option<usize> {
    if !YEARS.contains(&year) || !DAYS.contains(&day) {
        return None;
    }
    Some(usize::from(year - YEARS.start()) * DAYS_IN_YEAR + usize::from(day - 1))
}

/// Puzzle day stored in a table slot
fn day_of(slot: usize) -> (u16, u8) {
    let year = YEARS.start() + (slot / DAYS_IN_YEAR) as u16;
    let day = (slot % DAYS_IN_YEAR) as u8 + 1;
    (year, day)
}

/// Parses an input into a solver instance borrowing from it
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a day without parsing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct Registration {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

impl Registration {
    fn info(&self, (year, day): (u16, u8)) -> SolverInfo {
        SolverInfo {
            year,
            day,
            parts: self.parts,
            tags: self.tags,
        }
    }
}

/// Collects registrations, then freezes them into a [`SolverRegistry`]
///
/// ```
/// use aoc_solver::RegistryBuilder;
///
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// assert!(registry.iter_info().all(|info| info.parts >= 1));
/// ```
pub struct RegistryBuilder {
    slots: Vec<Option<Registration>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(SLOTS).collect(),
        }
    }

    /// Add a factory for one day
    ///
    /// Fails if the day is outside 2015..=2034 / 1..=25 or already taken.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let target = &mut self.slots[index];
        if target.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        *target = Some(Registration {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Add every solver submitted through `#[derive(AutoRegisterSolver)]`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Add the submitted solvers accepted by `filter`
    ///
    /// ```
    /// use aoc_solver::RegistryBuilder;
    ///
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"fast"))
    ///     .unwrap()
    ///     .build();
    /// assert!(registry.iter_info().all(|info| info.tags.contains(&"fast")));
    /// ```
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .into_iter()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                plugin
                    .solver
                    .register_with(builder, plugin.year, plugin.day, plugin.tags)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry { slots: self.slots }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen set of registered solvers
pub struct SolverRegistry {
    slots: Vec<Option<Registration>>,
}

impl SolverRegistry {
    /// Registered days in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, reg)| Some(reg.as_ref()?.info(day_of(i))))
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.registration(year, day)
            .map(|reg| reg.info((year, day)))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.registration(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the day's solver
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if slot(year, day).is_none() {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let reg = self
            .registration(year, day)
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((reg.factory)(input)?)
    }

    fn registration(&self, year: u16, day: u8) -> Option<&Registration> {
        self.slots.get(slot(year, day)?)?.as_ref()
    }
}

/// Lets solvers of different types sit in one `inventory` collection
///
/// Implemented for every `'static` [`Solver`](crate::Solver).
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, tags, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }
}

/// Submitted to `inventory` by `#[derive(AutoRegisterSolver)]`
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin { year: 2023, day: 14, solver: &Dish, tags: &["grid"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register `$solver` for a day on a builder binding, panicking on conflict
///
/// For tests and small binaries that skip plugin collection.
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                &[],
                |input: &str| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new(
                        $year, $day, input,
                    )?))
                },
            )
            .unwrap_or_else(|e| panic!("cannot register solver: {}", e));
    };
}
