use std::fmt;
use std::str::FromStr;

use crate::config::CheckConfig;
use crate::error::{Error, Result};
use crate::runners::{CheckRunner, Pep8Runner, PyflakesRunner, TodoRunner};

/// The checkers this adapter knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckerKind {
    Pep8,
    Pyflakes,
    Todo,
}

impl CheckerKind {
    pub const ALL: [CheckerKind; 3] =
        [CheckerKind::Pep8, CheckerKind::Pyflakes, CheckerKind::Todo];

    pub fn name(&self) -> &'static str {
        match self {
            CheckerKind::Pep8 => "pep8",
            CheckerKind::Pyflakes => "pyflakes",
            CheckerKind::Todo => "todo",
        }
    }

    /// Comma-separated list of all checker names, for error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Construct the runner for this checker
    pub fn runner(&self, config: &CheckConfig) -> Box<dyn CheckRunner> {
        match self {
            CheckerKind::Pep8 => Box::new(Pep8Runner::new(config)),
            CheckerKind::Pyflakes => Box::new(PyflakesRunner::new(config)),
            CheckerKind::Todo => Box::new(TodoRunner::new(config)),
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CheckerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "pep8" => Ok(CheckerKind::Pep8),
            "pyflakes" => Ok(CheckerKind::Pyflakes),
            "todo" => Ok(CheckerKind::Todo),
            other => Err(Error::UnknownChecker {
                name: other.to_string(),
                valid: Self::valid_names(),
            }),
        }
    }
}
