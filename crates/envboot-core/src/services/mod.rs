//! Core services.

mod bootstrapper;

pub use bootstrapper::{
    BootstrapReport, ConfigBootstrapper, StepFailure, StepOutcome, VariableSet, apply_records,
};
