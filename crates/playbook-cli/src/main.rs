#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use output::OutputMode;
use playbook_core::config::{self, PlaybookConfig};
use playbook_core::progress::ProgressStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "pb: terminal playbook reader",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to playbook.toml (defaults to ./playbook.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the progress state file location.
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Open the playbook in a full-screen TUI",
        after_help = "EXAMPLES:\n    # Read the built-in playbook\n    pb view\n\n    # Read a custom playbook\n    pb view --config team/playbook.toml"
    )]
    View,

    #[command(
        about = "List checklist tasks with completion state",
        after_help = "EXAMPLES:\n    # Human-readable list\n    pb tasks\n\n    # Machine-readable output\n    pb tasks --json"
    )]
    Tasks,

    #[command(
        about = "Mark a checklist task as done",
        after_help = "EXAMPLES:\n    pb check secure-sponsor"
    )]
    Check {
        /// Task id to check off.
        id: String,
    },

    #[command(
        about = "Mark a checklist task as not done",
        after_help = "EXAMPLES:\n    pb uncheck secure-sponsor"
    )]
    Uncheck {
        /// Task id to uncheck.
        id: String,
    },

    #[command(
        about = "Clear all saved checklist progress",
        after_help = "EXAMPLES:\n    pb reset"
    )]
    Reset,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PLAYBOOK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "playbook=debug,info"
        } else {
            "playbook=info,warn"
        })
    });

    let format = env::var("PLAYBOOK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn load_config(cli: &Cli) -> Result<PlaybookConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("playbook.toml"));
    config::load_config(&path).context("load playbook config")
}

/// Resolve the progress store path: flag, then config, then platform default.
fn resolve_store(cli: &Cli, cfg: &PlaybookConfig) -> Result<ProgressStore> {
    let path = if let Some(path) = cli.state_file.clone() {
        path
    } else if let Some(path) = cfg.state_file.clone() {
        path
    } else {
        ProgressStore::default_path().context("resolve progress state path")?
    };
    Ok(ProgressStore::new(path))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose && !cli.quiet {
        info!("Verbose mode enabled");
    }

    let cfg = load_config(&cli)?;
    let store = resolve_store(&cli, &cfg)?;
    let output = cli.output_mode();
    let behavior = cfg.behavior.clone();
    let playbook = cfg.into_playbook();

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => cmd::view::run_view(playbook, &behavior, store),
        Commands::Tasks => cmd::tasks::run_tasks(&playbook, &store, output),
        Commands::Check { id } => cmd::check::run_check(&playbook, &store, &id, output),
        Commands::Uncheck { id } => cmd::check::run_uncheck(&playbook, &store, &id, output),
        Commands::Reset => cmd::reset::run_reset(&store, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["pb"]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parses_check_with_state_file() {
        let cli = Cli::parse_from(["pb", "check", "secure-sponsor", "--state-file", "/tmp/p.json"]);
        match cli.command {
            Some(Commands::Check { ref id }) => assert_eq!(id, "secure-sponsor"),
            _ => panic!("expected check command"),
        }
        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn output_mode_from_flag() {
        let cli = Cli::parse_from(["pb", "--json", "tasks"]);
        assert_eq!(cli.output_mode(), OutputMode::Json);
    }
}
