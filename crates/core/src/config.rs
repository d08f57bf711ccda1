use std::collections::BTreeSet;
use std::path::PathBuf;

/// Checkers run when the command line does not name any
pub const DEFAULT_CHECKERS: &[&str] = &["pyflakes", "pep8"];

/// Error codes suppressed by default, merged with codes given on the
/// command line
pub const DEFAULT_IGNORE_CODES: &[&str] = &[];

/// How rendered findings are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed `LEVEL:LINE:FILE:[TYPENUM] DESC` template
    #[default]
    Flymake,
    /// One JSON object per finding
    Json,
}

/// Per-invocation configuration, assembled by the caller.
///
/// There is no config file; the defaults above are the only built-in source
/// and the command line overrides them.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Checker names, run in the order given
    pub checkers: Vec<String>,
    /// Codes handed to checkers that support native filtering
    pub ignore_codes: BTreeSet<String>,
    /// Virtualenv whose bin directory supplies checker binaries
    pub virtualenv: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            checkers: DEFAULT_CHECKERS.iter().map(|s| s.to_string()).collect(),
            ignore_codes: DEFAULT_IGNORE_CODES.iter().map(|s| s.to_string()).collect(),
            virtualenv: None,
            format: OutputFormat::default(),
        }
    }
}

impl CheckConfig {
    /// Resolve a checker binary, preferring the virtualenv's bin directory
    /// when it holds the program
    pub fn resolve_program(&self, name: &str) -> PathBuf {
        if let Some(venv) = &self.virtualenv {
            let candidate = venv.join("bin").join(name);
            if candidate.exists() {
                return candidate;
            }
        }
        PathBuf::from(name)
    }
}
