//! Runner for the pyflakes unused-symbol checker.
//!
//! Raw output looks like:
//!
//! ```text
//! tests/test_richtypes.py:4: 'doom' imported but unused
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::command::CheckCommand;
use crate::config::CheckConfig;
use crate::finding::{Finding, Level, RawFields};
use crate::runners::traits::CheckRunner;

/// Description fragments that demote a pyflakes report to a warning
const WARNING_PATTERNS: &[&str] = &["imported but unused", "redefinition of unused"];

#[derive(Debug, Clone)]
pub struct PyflakesRunner {
    program: PathBuf,
}

impl PyflakesRunner {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            program: config.resolve_program("pyflakes"),
        }
    }
}

impl CheckRunner for PyflakesRunner {
    fn name(&self) -> &'static str {
        "pyflakes"
    }

    fn invocation(&self, target: &Path) -> CheckCommand {
        CheckCommand::new(
            self.program.clone(),
            vec![target.to_string_lossy().to_string()],
        )
    }

    fn parse_line(&self, line: &str) -> Option<RawFields> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^(?P<filename>[^:]+):(?P<line_number>[^:]+):\s*(?P<description>.*)$")
                .unwrap()
        });
        re.captures(line).map(|caps| RawFields::from_captures(&caps))
    }

    fn normalize(&self, raw: RawFields) -> Finding {
        let level = if WARNING_PATTERNS
            .iter()
            .any(|pattern| raw.description.contains(pattern))
        {
            Level::Warning
        } else {
            Level::Error
        };
        Finding {
            level,
            error_type: "PY".to_string(),
            error_number: "F".to_string(),
            description: raw.description,
            filename: raw.filename,
            line_number: raw.line_number,
        }
    }
}
