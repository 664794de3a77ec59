//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;
use crate::seed::parse_key_val;

/// Command-line interface for loading remote variable documents into an
/// environment.
#[derive(Parser)]
#[command(name = "envboot")]
#[command(about = "Load global and shared variable documents into an environment")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Load environment variables from this file instead of `.env`
    #[arg(long = "env-file", global = true)]
    pub env_file: Option<PathBuf>,

    /// Seed the environment from an exported environment JSON file
    #[arg(long = "seed-file", env = "ENVBOOT_SEED_FILE", global = true)]
    pub seed_file: Option<PathBuf>,

    /// Seed a single variable (repeatable, applied last)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_val, global = true)]
    pub vars: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
