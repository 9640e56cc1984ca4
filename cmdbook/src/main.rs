use anyhow::Result;
use clap::{Parser, Subcommand};
use cmdbook::commands::add::AddArgs;
use cmdbook::commands::config_cmd::ConfigArgs;
use cmdbook::commands::delete::DeleteArgs;
use cmdbook::commands::import_export::{ExportArgs, ImportArgs};
use cmdbook::commands::list::ListArgs;
use cmdbook::commands::search::SearchArgs;
use cmdbook::commands::update::UpdateArgs;
use cmdbook::commands;
use cmdbook::config::Config;
use cmdbook::errors::display_user_error;
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser)]
#[command(name = "cbk", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a command with an alias, tags and a note
    Add(AddArgs),
    /// Search saved commands and copy the selection to the clipboard
    Search(SearchArgs),
    /// List saved commands
    List(ListArgs),
    /// Update a saved command
    Update(UpdateArgs),
    /// Delete a saved command
    Delete(DeleteArgs),
    /// Export all commands as JSON
    Export(ExportArgs),
    /// Import commands from a JSON export
    Import(ImportArgs),
    /// Change a persisted default
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => display_user_error(&err),
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("{err}"))
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|err| {
        warn!("failed to load config, using defaults: {err:#}");
        Config::default()
    });

    match cli.command {
        Commands::Add(args) => commands::add::run(&args),
        Commands::Search(args) => commands::search::run(&args, &config),
        Commands::List(args) => commands::list::run(&args, &config),
        Commands::Update(args) => commands::update::run(&args, &config),
        Commands::Delete(args) => commands::delete::run(&args, &config),
        Commands::Export(args) => commands::import_export::run_export(&args),
        Commands::Import(args) => commands::import_export::run_import(&args),
        Commands::Config(args) => commands::config_cmd::run(&args),
    }
}
