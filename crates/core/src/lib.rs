//! pyflymake - run Python static checkers and normalize their output
//!
//! This crate provides functionality to:
//! - Invoke external checkers (pyflakes, pep8, a TODO/FIXME grep) against one source file
//! - Parse each tool's output lines through per-tool grammars
//! - Normalize matches into uniform findings an editor can display inline
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod finding;
pub mod registry;
pub mod runners;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::CheckCommand;
pub use config::{CheckConfig, OutputFormat, DEFAULT_CHECKERS, DEFAULT_IGNORE_CODES};
pub use dispatch::Dispatcher;
pub use finding::{Finding, Level, RawFields};
pub use registry::CheckerKind;
pub use runners::CheckRunner;
