//! Configuration bootstrapper service.
//!
//! Loads the global variable document and then the shared one, applying
//! each into the environment store. Shared values overwrite global values
//! for identical keys because they are applied second.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ConfigSettings, SourceUrl, VariableRecord};
use crate::ports::{EnvironmentStore, SourcePortError, VariableSourcePort};

/// The two variable documents, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableSet {
    /// Baseline values shared by every deployment.
    Global,
    /// Deployment-specific overrides applied after the baseline.
    Shared,
}

impl VariableSet {
    /// Path template for this set.
    pub fn path_template(self, settings: &ConfigSettings) -> &str {
        match self {
            Self::Global => &settings.global_path_template,
            Self::Shared => &settings.shared_path_template,
        }
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Shared => f.write_str("shared"),
        }
    }
}

/// Why a step applied nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The URL could not be built from the settings.
    InvalidUrl(String),
    /// The fetch or decode failed.
    Source(SourcePortError),
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(message) => write!(f, "Invalid base URL: {message}"),
            Self::Source(err) => err.fmt(f),
        }
    }
}

/// Outcome of one fetch-and-apply step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The document was fetched and every record written.
    Applied {
        /// Number of records written
        count: usize,
    },
    /// Nothing from this document was written.
    Failed(StepFailure),
}

impl StepOutcome {
    /// Whether the step applied its document.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// What happened during a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Outcome of the global step
    pub global: StepOutcome,
    /// Outcome of the shared step
    pub shared: StepOutcome,
}

impl BootstrapReport {
    /// Whether both documents were applied.
    pub const fn is_complete(&self) -> bool {
        self.global.is_applied() && self.shared.is_applied()
    }

    /// Failed steps, in run order.
    pub fn failures(&self) -> Vec<(VariableSet, &StepFailure)> {
        [
            (VariableSet::Global, &self.global),
            (VariableSet::Shared, &self.shared),
        ]
        .into_iter()
        .filter_map(|(set, outcome)| match outcome {
            StepOutcome::Failed(failure) => Some((set, failure)),
            StepOutcome::Applied { .. } => None,
        })
        .collect()
    }
}

/// Loads remote variable documents into an environment store.
pub struct ConfigBootstrapper {
    /// Where variable documents are fetched from.
    source: Arc<dyn VariableSourcePort>,
}

impl ConfigBootstrapper {
    /// Create a bootstrapper over a variable source.
    pub fn new(source: Arc<dyn VariableSourcePort>) -> Self {
        Self { source }
    }

    /// Fetch and apply the global document, then the shared document.
    ///
    /// The shared fetch is only issued after the global step has finished,
    /// whatever its outcome. A failed step writes nothing and never stops
    /// the run.
    pub async fn run(
        &self,
        settings: &ConfigSettings,
        store: &mut dyn EnvironmentStore,
    ) -> BootstrapReport {
        let global = self.run_step(VariableSet::Global, settings, store).await;
        let shared = self.run_step(VariableSet::Shared, settings, store).await;

        BootstrapReport { global, shared }
    }

    async fn run_step(
        &self,
        set: VariableSet,
        settings: &ConfigSettings,
        store: &mut dyn EnvironmentStore,
    ) -> StepOutcome {
        let url = match SourceUrl::resolve(settings, set.path_template(settings)) {
            Ok(url) => url,
            Err(e) => {
                warn!(%set, base_url = %settings.base_url, "Cannot build variable URL: {e}");
                return StepOutcome::Failed(StepFailure::InvalidUrl(e.to_string()));
            }
        };

        info!(%set, %url, "Fetching variable document");

        match self.source.fetch_variables(&url).await {
            Ok(records) => {
                let count = apply_records(store, &records);
                info!(%set, count, "Applied variables");
                StepOutcome::Applied { count }
            }
            Err(e) => {
                warn!(%set, %url, "Pre-request error, {set} variables not applied: {e}");
                StepOutcome::Failed(StepFailure::Source(e))
            }
        }
    }
}

/// Write every record into the store, in document order.
///
/// Existing values are overwritten. Returns the number of records written.
pub fn apply_records(store: &mut dyn EnvironmentStore, records: &[VariableRecord]) -> usize {
    for record in records {
        debug!(key = %record.key, overwrite = store.contains(&record.key), "Setting variable");
        store.set(&record.key, &record.value);
    }
    records.len()
}
