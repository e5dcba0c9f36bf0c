//! Puzzle input loading from local files

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where to find puzzle inputs
///
/// Directory layout: `{input_dir}/{year}_day{day:02}.txt`. An explicit file
/// overrides the layout for every year/day it is asked about.
#[derive(Debug, Clone)]
pub struct InputSource {
    input_dir: PathBuf,
    file: Option<PathBuf>,
}

impl InputSource {
    /// Read inputs from files laid out under `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            file: None,
        }
    }

    /// Always read `file`, whatever the year/day
    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    /// Path the input for a year/day is read from
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.file {
            Some(file) => file.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(year, day, path = %path.display(), bytes = content.len(), "loaded input");
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::NotFound(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}
