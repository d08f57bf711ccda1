//! Core trait for the checker runner architecture

use std::path::Path;

use crate::command::CheckCommand;
use crate::finding::{Finding, RawFields};

/// Core trait that every checker runner must implement
pub trait CheckRunner: Send + Sync {
    /// Get the registry name of this checker
    fn name(&self) -> &'static str;

    /// Build the full invocation for one run against `target`
    fn invocation(&self, target: &Path) -> CheckCommand;

    /// Apply the output-line grammar; a non-matching line yields `None`
    fn parse_line(&self, line: &str) -> Option<RawFields>;

    /// Derive severity and canonical code from the captured fields
    fn normalize(&self, raw: RawFields) -> Finding;
}
