//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: the raw-content HTTP client is instantiated here and handed to
//! the core bootstrapper.

use std::sync::Arc;
use std::time::Duration;

use envboot_core::{ConfigBootstrapper, InMemoryEnvironmentStore, VariableSourcePort};
use envboot_github::{DEFAULT_TIMEOUT_SECS, DefaultRawClient, RawClientConfig};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Timeout applied to each document request.
    pub timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Loads variable documents into the store.
    pub bootstrapper: ConfigBootstrapper,
    /// The environment for this invocation.
    pub store: InMemoryEnvironmentStore,
}

impl CliContext {
    /// Build a context over an arbitrary variable source.
    pub fn with_source(source: Arc<dyn VariableSourcePort>) -> Self {
        Self {
            bootstrapper: ConfigBootstrapper::new(source),
            store: InMemoryEnvironmentStore::new(),
        }
    }
}

/// Wire the production HTTP client into a fresh context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client_config = RawClientConfig::new()
        .with_timeout(config.timeout)
        .with_user_agent(concat!("envboot/", env!("CARGO_PKG_VERSION")));
    let client = DefaultRawClient::new(&client_config)?;

    Ok(CliContext::with_source(Arc::new(client)))
}
