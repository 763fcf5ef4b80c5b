//! Chancery launcher: TUI by default, headless commands for scripts.

use anyhow::Result;
use chancery::cli::{list, tui};
use chancery::config::{self, AppConfig};
use chancery_logging::{init_logging, LogConfig};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "chancery", about = "Embassy administration console", version)]
struct Cli {
    /// Verbose console logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive console (default)
    Tui(tui::TuiArgs),
    /// Print a module's records as a table
    List(list::ListArgs),
    /// List the registered modules
    Modules,
    /// Aggregated logistics inventory
    Inventory,
    /// Show resolved paths and settings
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui(tui::TuiArgs::default()));

    let tui_mode = matches!(command, Command::Tui(_));
    init_logging(LogConfig {
        app_name: "chancery",
        verbose: cli.verbose,
        tui_mode,
    })?;

    let app_config = AppConfig::load()?;
    info!(org = %app_config.org_id, "chancery starting");

    match command {
        Command::Tui(args) => tui::run(args, app_config).await,
        Command::List(args) => list::run(args),
        Command::Modules => list::run_modules(),
        Command::Inventory => list::run_inventory(),
        Command::Config(args) => config::run(args),
    }
}
