//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use std::io;
use std::path::PathBuf;

use tally_core::Input;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// A resolved input to analyse
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A regular file
    File(PathBuf),
}

impl InputSource {
    /// Name used in logs and report headers
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Convert into a core input
    pub fn into_input(self) -> Input {
        match self {
            InputSource::Stdin => Input::from_reader(io::stdin()),
            InputSource::File(path) => Input::File(path),
        }
    }
}
