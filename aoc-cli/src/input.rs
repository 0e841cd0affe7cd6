//! Puzzle inputs stored on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Path of the input for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Read the input for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_input(&self.input_path(year, day), year, day)
    }
}

/// Read an input file, mapping a missing file to [`InputError::NotFound`]
pub fn read_input(path: &Path, year: u16, day: u8) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            year,
            day,
            path: path.to_path_buf(),
        },
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
