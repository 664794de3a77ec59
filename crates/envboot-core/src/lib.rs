#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::{
    ConfigSettings, DEFAULT_BRANCH, SettingsError, SourceUrl, VariableRecord, keys,
    parse_document,
};
pub use ports::{EnvironmentStore, SourcePortError, SourcePortResult, VariableSourcePort};
pub use services::{
    BootstrapReport, ConfigBootstrapper, StepFailure, StepOutcome, VariableSet, apply_records,
};
pub use store::InMemoryEnvironmentStore;

// Silence unused dev-dependency warnings; integration tests use these
#[cfg(test)]
use tokio_test as _;
