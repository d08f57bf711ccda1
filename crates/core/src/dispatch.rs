//! Dispatcher that coordinates checker resolution, execution, and rendering

use crate::{
    command::CheckCommand,
    config::{CheckConfig, OutputFormat},
    error::Result,
    finding::Finding,
    registry::CheckerKind,
};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct Dispatcher {
    config: CheckConfig,
}

impl Dispatcher {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Run every configured checker against `target`, rendering findings to
    /// `out` as they are parsed.
    ///
    /// All checker names resolve before the first spawn, so an unknown name
    /// never runs anything. A checker that fails to launch aborts the rest
    /// of the batch.
    pub fn check_file<W: Write>(&self, target: &Path, out: &mut W) -> Result<()> {
        for kind in self.resolve()? {
            self.run_checker(kind, target, out)?;
        }
        Ok(())
    }

    /// Build every configured invocation without executing anything
    pub fn plan(&self, target: &Path) -> Result<Vec<CheckCommand>> {
        Ok(self
            .resolve()?
            .into_iter()
            .map(|kind| kind.runner(&self.config).invocation(target))
            .collect())
    }

    fn resolve(&self) -> Result<Vec<CheckerKind>> {
        self.config
            .checkers
            .iter()
            .map(|name| name.parse())
            .collect()
    }

    fn run_checker<W: Write>(&self, kind: CheckerKind, target: &Path, out: &mut W) -> Result<()> {
        let runner = kind.runner(&self.config);
        let command = runner.invocation(target);
        debug!("running {}", command.to_shell_command());

        // Checkers exit non-zero when they report findings; the status is
        // logged and otherwise ignored.
        let output = command.execute()?;
        debug!("{} exited with {}", kind, output.status);

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut count = 0usize;
        for line in stdout.lines().chain(stderr.lines()) {
            if let Some(raw) = runner.parse_line(line) {
                self.render(&runner.normalize(raw), out)?;
                count += 1;
            }
        }
        debug!("{} produced {} findings", kind, count);
        Ok(())
    }

    fn render<W: Write>(&self, finding: &Finding, out: &mut W) -> Result<()> {
        match self.config.format {
            OutputFormat::Flymake => writeln!(out, "{finding}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(finding)?)?,
        }
        Ok(())
    }
}
