use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcasy_core::{AppConfig, Catalog};

mod commands;

#[derive(Parser)]
#[command(name = "showcasy")]
#[command(author, version, about = "A freelancer portfolio you can browse from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Route to open first, e.g. /works/safe-space or /about#approach
        #[arg(short, long, default_value = "/")]
        path: String,
    },
    /// List every route, one per case study included
    Routes,
    /// Validate fixture content, image assets and key bindings
    Check,
    /// Set or clear the stored color scheme
    Theme {
        #[arg(value_enum)]
        scheme: ThemeChoice,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Forget the stored choice and follow the terminal
    System,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);
    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    // Fixture content; a duplicate or malformed slug stops here
    let catalog = Arc::new(Catalog::load()?);

    match cli.command {
        Some(Commands::Run { path }) => commands::run::run(config, catalog, &path).await,
        None => commands::run::run(config, catalog, "/").await,
        Some(Commands::Routes) => commands::routes::run(&catalog),
        Some(Commands::Check) => commands::check::run(&config, &catalog),
        Some(Commands::Theme { scheme }) => commands::theme::run(&config, scheme),
    }
}

/// The TUI owns the terminal, so it logs to a file; other commands log to stderr
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if tui {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
