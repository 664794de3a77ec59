//! Run command handler.
//!
//! Fetches the global document, then the shared document, applies both to
//! the seeded environment and prints the result.

use std::io::Write;

use anyhow::Result;
use envboot_core::{ConfigSettings, EnvironmentStore};
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::{render_entries, summarize};

/// Execute the run command.
///
/// Failed steps are reported but do not fail the command unless `strict`
/// is set.
///
/// # Errors
///
/// This function will return an error if:
/// - A required setting is missing from the seeded environment
/// - `strict` is set and either document was not applied
/// - Writing the output fails
pub async fn execute(
    ctx: &mut CliContext,
    strict: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let settings = ConfigSettings::from_store(&ctx.store).map_err(CliError::from)?;

    let report = ctx.bootstrapper.run(&settings, &mut ctx.store).await;
    for line in summarize(&report) {
        if report.is_complete() {
            info!("{line}");
        } else {
            warn!("{line}");
        }
    }

    out.write_all(render_entries(&ctx.store.entries(), format).as_bytes())
        .map_err(CliError::from)?;

    if strict && !report.is_complete() {
        let failed: Vec<String> = report
            .failures()
            .into_iter()
            .map(|(set, failure)| format!("{set} ({failure})"))
            .collect();
        return Err(CliError::Incomplete(failed.join(", ")).into());
    }

    Ok(())
}
