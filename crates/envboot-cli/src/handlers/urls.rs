//! Urls command handler.

use std::io::Write;

use anyhow::Result;
use envboot_core::{ConfigSettings, EnvironmentStore, SourceUrl, VariableSet};

use crate::error::CliError;

/// Print the redacted URL of each variable document, in fetch order.
///
/// Only reads the store, so no HTTP client is needed.
pub fn execute(store: &dyn EnvironmentStore, out: &mut dyn Write) -> Result<()> {
    let settings = ConfigSettings::from_store(store).map_err(CliError::from)?;

    for set in [VariableSet::Global, VariableSet::Shared] {
        let url = SourceUrl::resolve(&settings, set.path_template(&settings))
            .map_err(|e| CliError::Config(format!("Invalid base URL: {e}")))?;
        writeln!(out, "{set}\t{url}").map_err(CliError::from)?;
    }

    Ok(())
}
