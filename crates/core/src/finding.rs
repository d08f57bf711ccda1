use std::fmt;

use regex::Captures;
use serde::Serialize;

/// Severity of a normalized finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => write!(f, "WARNING"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// Fields captured from one raw checker output line.
///
/// Groups a grammar does not define stay empty, so rendering never has to
/// special-case a checker that reports fewer fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFields {
    pub filename: String,
    pub line_number: String,
    pub error_number: String,
    pub description: String,
}

impl RawFields {
    /// Build from a grammar match, filling absent groups with empty strings
    pub fn from_captures(caps: &Captures<'_>) -> Self {
        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };
        Self {
            filename: group("filename"),
            line_number: group("line_number"),
            error_number: group("error_number"),
            description: group("description"),
        }
    }
}

/// One normalized finding, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub error_type: String,
    pub error_number: String,
    pub description: String,
    pub filename: String,
    pub line_number: String,
}

impl fmt::Display for Finding {
    // LEVEL:LINE_NUMBER:FILENAME:[ERROR_TYPEERROR_NUMBER] DESCRIPTION
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:[{}{}] {}",
            self.level,
            self.line_number,
            self.filename,
            self.error_type,
            self.error_number,
            self.description
        )
    }
}
