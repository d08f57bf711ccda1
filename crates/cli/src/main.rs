use anyhow::{Context, Result};
use clap::Parser;
use pyflymake_core::{CheckConfig, Dispatcher, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

/// Run Python static checkers over one file and print flymake-readable lines
#[derive(Parser, Debug)]
#[command(name = "pyflymake")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    /// Source file to check
    filename: PathBuf,

    /// Comma-separated list of checkers to run (default: pyflakes,pep8)
    #[arg(short, long, value_delimiter = ',', value_name = "CHECKERS")]
    checkers: Option<Vec<String>>,

    /// Error code for the checker's native ignore list (repeatable)
    #[arg(short, long = "ignore", value_name = "CODE")]
    ignore: Vec<String>,

    /// Virtualenv whose bin directory supplies the checker binaries
    #[arg(short = 'e', long, value_name = "DIR")]
    virtualenv: Option<PathBuf>,

    /// Emit findings as JSON lines instead of the flymake template
    #[arg(long)]
    json: bool,

    /// Print each checker invocation without executing
    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Argument errors exit 1 like the unknown-checker path; --help and
    // --version keep clap's exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let config = build_config(&cli);
    debug!(
        "checking {} with {:?}",
        cli.filename.display(),
        config.checkers
    );

    let dispatcher = Dispatcher::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        for command in dispatcher.plan(&cli.filename)? {
            writeln!(out, "{}", command.to_shell_command())?;
        }
        return Ok(());
    }

    dispatcher
        .check_file(&cli.filename, &mut out)
        .with_context(|| format!("Failed to check {}", cli.filename.display()))?;

    Ok(())
}

fn build_config(cli: &Cli) -> CheckConfig {
    let mut config = CheckConfig::default();
    if let Some(checkers) = &cli.checkers {
        config.checkers = checkers.clone();
    }
    config.ignore_codes.extend(cli.ignore.iter().cloned());
    config.virtualenv = cli.virtualenv.clone();
    if cli.json {
        config.format = OutputFormat::Json;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_config_merges_cli_overrides() {
        let cli = Cli::parse_from([
            "pyflymake",
            "-c",
            "todo,pep8",
            "-i",
            "E501",
            "-i",
            "W291",
            "--json",
            "app.py",
        ]);
        let config = build_config(&cli);
        assert_eq!(config.checkers, vec!["todo", "pep8"]);
        assert!(config.ignore_codes.contains("E501"));
        assert!(config.ignore_codes.contains("W291"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults_when_flags_absent() {
        let cli = Cli::parse_from(["pyflymake", "app.py"]);
        let config = build_config(&cli);
        assert_eq!(config.checkers, vec!["pyflakes", "pep8"]);
        assert!(config.ignore_codes.is_empty());
        assert_eq!(config.format, OutputFormat::Flymake);
        assert!(!cli.dry_run);
    }
}
