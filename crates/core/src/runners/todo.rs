//! Runner for the TODO/FIXME scanner, a plain grep invocation.
//!
//! Raw output looks like:
//!
//! ```text
//! users.py:356:FIXME this will fail if None
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::command::CheckCommand;
use crate::config::CheckConfig;
use crate::finding::{Finding, Level, RawFields};
use crate::runners::traits::CheckRunner;

#[derive(Debug, Clone)]
pub struct TodoRunner {
    program: PathBuf,
}

impl TodoRunner {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            program: config.resolve_program("grep"),
        }
    }
}

impl CheckRunner for TodoRunner {
    fn name(&self) -> &'static str {
        "todo"
    }

    fn invocation(&self, target: &Path) -> CheckCommand {
        CheckCommand::new(
            self.program.clone(),
            vec![
                "-H".to_string(),
                "-n".to_string(),
                "-i".to_string(),
                "-e".to_string(),
                "todo".to_string(),
                "-e".to_string(),
                "fixme".to_string(),
                target.to_string_lossy().to_string(),
            ],
        )
    }

    fn parse_line(&self, line: &str) -> Option<RawFields> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(
                r"^(?P<filename>[^:]+):(?P<line_number>[^:]+):.*?\b(?P<error_number>(?i:todo|fixme))\b[:\s]*(?P<description>.*)$",
            )
            .unwrap()
        });
        re.captures(line).map(|caps| RawFields::from_captures(&caps))
    }

    fn normalize(&self, raw: RawFields) -> Finding {
        let code = raw.error_number.to_ascii_uppercase();
        let level = if code == "FIXME" {
            Level::Error
        } else {
            Level::Warning
        };
        Finding {
            level,
            error_type: String::new(),
            error_number: code,
            description: raw.description,
            filename: raw.filename,
            line_number: raw.line_number,
        }
    }
}
