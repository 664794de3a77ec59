//! Available subcommands.

use clap::{Subcommand, ValueEnum};
use envboot_github::DEFAULT_TIMEOUT_SECS;

/// How the final environment is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=VALUE` lines
    Env,
    /// JSON array of `{key, value}` objects
    Json,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and apply the global, then the shared variable document
    Run {
        /// Exit with a non-zero status if either document was not applied
        #[arg(long)]
        strict: bool,
        /// Output format for the resulting environment
        #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,
        /// Request timeout in seconds
        #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Print the resolved document URLs without fetching them
    Urls,
}
