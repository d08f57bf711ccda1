use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// One fully-resolved checker invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CheckCommand {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    pub fn to_shell_command(&self) -> String {
        let program = self.program.display().to_string();
        let mut cmd = if program.contains(' ') {
            format!("'{program}'")
        } else {
            program
        };
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Run the checker with both output streams captured.
    ///
    /// The exit status travels inside the returned `Output`; checkers exit
    /// non-zero when they report findings, so only a failed spawn is an error.
    pub fn execute(&self) -> Result<Output> {
        Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| Error::LaunchError {
                command: self.to_shell_command(),
                source,
            })
    }
}
