//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution derives `AocSolver` and `AutoRegisterSolver`, so linking
//! this crate is enough for `RegistryBuilder::register_all_plugins` to find
//! them.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
