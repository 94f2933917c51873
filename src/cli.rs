//! CLI definitions and command routing.

use anyhow::Result;
use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{self, Options, Outcome};
use crate::config::{self, Config};
use crate::error::HostsError;

const AFTER_HELP: &str = "\
All commands that change the hosts file will implicitly reformat it.

Configuration:
  HOSTESS_FMT   may be set to unix or windows to force that platform's syntax
  HOSTESS_PATH  may be set to point to a file other than the platform default
  HOSTESS_LOG   log filter for diagnostics on stderr (default: warn)";

#[derive(Parser)]
#[command(name = "hostess", version)]
#[command(after_help = AFTER_HELP, arg_required_else_help = true)]
pub struct Cli {
    /// Preview changes but do not rewrite the hosts file
    #[arg(short = 'n', global = true)]
    pub preview: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reformat the hosts file
    Fmt,
    /// Add or overwrite a hosts entry
    Add { hostname: String, ip: String },
    /// Remove a hosts entry (all address families)
    Rm { hostname: String },
    /// Enable a hosts entry
    On { hostname: String },
    /// Disable a hosts entry
    Off { hostname: String },
    /// List hosts entries, optionally only those for one hostname
    Ls { hostname: Option<String> },
    /// Exit 0 if entry present in hosts file, 1 if not
    Has { hostname: String },
    /// Export hosts entries as JSON
    Dump,
    /// Import hosts entries from JSON
    Apply { filename: PathBuf },
    /// Print version
    Version,
}

/// The clap command with the hosts path this run would edit in its about text.
fn command() -> clap::Command {
    let path = config::resolve_hosts_path(std::env::var_os(config::PATH_VAR));
    Cli::command().about(format!("An idempotent tool for managing {}", path.display()))
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<ExitCode> {
    let parsed = command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches));
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => return parse_failure(e),
    };
    crate::logging::init();

    let config = Config::from_env()?;
    let opts = Options::new(config, cli.preview);

    match cli.command {
        Commands::Fmt => {
            let outcome = commands::format(&opts)?;
            let path = opts.config.hosts_path.display();
            let done = if outcome.written {
                format!("Formatted {path}")
            } else {
                format!("{path} already formatted")
            };
            report(&opts, &outcome, &done);
        }
        Commands::Add { hostname, ip } => {
            let outcome = commands::add(&opts, &hostname, &ip)?;
            report(&opts, &outcome, &format!("Added {hostname} -> {ip}"));
        }
        Commands::Rm { hostname } => {
            let outcome = commands::remove(&opts, &hostname)?;
            report(&opts, &outcome, &format!("Removed {hostname}"));
        }
        Commands::On { hostname } => {
            let outcome = commands::enable(&opts, &hostname)?;
            report(&opts, &outcome, &format!("Enabled {hostname}"));
        }
        Commands::Off { hostname } => {
            let outcome = commands::disable(&opts, &hostname)?;
            report(&opts, &outcome, &format!("Disabled {hostname}"));
        }
        Commands::Ls { hostname } => {
            let entries = commands::list(&opts, hostname.as_deref())?;
            let width = entries.iter().map(|e| e.hostname.len()).max().unwrap_or(0);
            for e in &entries {
                println!("{e:width$}");
            }
        }
        Commands::Has { hostname } => {
            return Ok(if commands::has(&opts, &hostname)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Dump => {
            println!("{}", commands::dump(&opts)?);
        }
        Commands::Apply { filename } => {
            let outcome = commands::apply(&opts, &filename)?;
            report(&opts, &outcome, &format!("Applied {}", filename.display()));
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Help and version (and bare `hostess`) print to stdout and succeed. An
/// unknown command is `InvalidCommand`; other usage errors exit 1.
fn parse_failure(e: clap::Error) -> Result<ExitCode> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            e.print()?;
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::InvalidSubcommand => {
            let name = e
                .get(ContextKind::InvalidSubcommand)
                .map(|v| v.to_string())
                .unwrap_or_default();
            Err(HostsError::InvalidCommand(name).into())
        }
        // Unrecognized words that are not flags land here when no
        // subcommand is similar enough to suggest.
        ErrorKind::UnknownArgument => match e.get(ContextKind::InvalidArg) {
            Some(arg) if !arg.to_string().starts_with('-') => {
                Err(HostsError::InvalidCommand(arg.to_string()).into())
            }
            _ => {
                e.print()?;
                Ok(ExitCode::FAILURE)
            }
        },
        _ => {
            e.print()?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// In preview print the diff; otherwise a one-line confirmation.
fn report(opts: &Options, outcome: &Outcome, done: &str) {
    if !opts.preview {
        println!("{done}");
        return;
    }
    if outcome.diff.is_empty() {
        println!("No changes");
        return;
    }
    print!("{}", outcome.diff);
    if outcome.entry_changes.is_empty() {
        println!("(formatting only)");
    }
}
