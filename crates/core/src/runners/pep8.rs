//! Runner for the pep8 style checker.
//!
//! Raw output looks like:
//!
//! ```text
//! spiders/structs.py:3:80: E501 line too long (80 characters)
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::command::CheckCommand;
use crate::config::CheckConfig;
use crate::finding::{Finding, Level, RawFields};
use crate::runners::traits::CheckRunner;

#[derive(Debug, Clone)]
pub struct Pep8Runner {
    program: PathBuf,
    ignore: BTreeSet<String>,
}

impl Pep8Runner {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            program: config.resolve_program("pep8"),
            ignore: config.ignore_codes.clone(),
        }
    }
}

impl CheckRunner for Pep8Runner {
    fn name(&self) -> &'static str {
        "pep8"
    }

    fn invocation(&self, target: &Path) -> CheckCommand {
        let codes: Vec<&str> = self.ignore.iter().map(String::as_str).collect();
        CheckCommand::new(
            self.program.clone(),
            vec![
                "--repeat".to_string(),
                format!("--ignore={}", codes.join(",")),
                target.to_string_lossy().to_string(),
            ],
        )
    }

    fn parse_line(&self, line: &str) -> Option<RawFields> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(
                r"^(?P<filename>[^:]+):(?P<line_number>[^:]+):[^:]+: (?P<error_number>\w+) (?P<description>.*)$",
            )
            .unwrap()
        });
        re.captures(line).map(|caps| RawFields::from_captures(&caps))
    }

    fn normalize(&self, raw: RawFields) -> Finding {
        // Style nits never block; everything pep8 reports is a warning
        Finding {
            level: Level::Warning,
            error_type: String::new(),
            error_number: raw.error_number,
            description: raw.description,
            filename: raw.filename,
            line_number: raw.line_number,
        }
    }
}
