//! CLI entry point - the composition root.
//!
//! Seeds the environment, wires the HTTP client via bootstrap and dispatches
//! to the command handlers.

use std::io;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use envboot_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, seed};
use envboot_core::InMemoryEnvironmentStore;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the environment; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_env_file(cli: &Cli) -> anyhow::Result<()> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                CliError::Io(format!("Failed to load env file {}: {e}", path.display()))
            })?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    load_env_file(&cli)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Run {
            strict,
            format,
            timeout_secs,
        } => {
            let mut ctx = bootstrap(&CliConfig {
                timeout: Duration::from_secs(timeout_secs),
            })?;
            seed::seed_all(&mut ctx.store, cli.seed_file.as_deref(), &cli.vars)?;
            handlers::run::execute(&mut ctx, strict, format, &mut stdout).await?;
        }
        Commands::Urls => {
            // Nothing is fetched, so no HTTP client is built
            let mut store = InMemoryEnvironmentStore::new();
            seed::seed_all(&mut store, cli.seed_file.as_deref(), &cli.vars)?;
            handlers::urls::execute(&store, &mut stdout)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        std::process::exit(CliError::exit_code_for(&err));
    }
}
