use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use punch_cli::commands::{Session, age, delete, list, log, punch, status, summary, total};
use punch_cli::{Cli, Commands, Config};
use punch_store::JsonFileStore;

/// Load config and locate the ledger file.
fn open_store(config_path: Option<&Path>) -> Result<JsonFileStore> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let store = JsonFileStore::new(config.ledger_path);
    tracing::debug!(path = %store.path().display(), "using ledger file");
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let store = open_store(cli.config.as_deref())?;
    let mut session = Session::open(&store)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Status(args) => status::run(&mut stdout, &session, args)?,
        Commands::In(args) => punch::run_in(&mut stdout, &mut session, args)?,
        Commands::Out(args) => punch::run_out(&mut stdout, &mut session, args)?,
        Commands::Entry(args) => punch::run_entry(&mut stdout, &mut session, args)?,
        Commands::Log(args) => log::run(&mut stdout, &mut session, args)?,
        Commands::Delete(args) => delete::run(&mut stdout, &mut session, args)?,
        Commands::List(args) => list::run(&mut stdout, &session, args)?,
        Commands::Total(args) => total::run(&mut stdout, &session, args)?,
        Commands::Summary(args) => summary::run(&mut stdout, &session, args)?,
        Commands::Age(args) => age::run(&mut stdout, &mut session, args)?,
    }

    stdout.flush()?;
    Ok(())
}
