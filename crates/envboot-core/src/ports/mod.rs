//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.

pub mod environment_store;
pub mod variable_source;

pub use environment_store::EnvironmentStore;
pub use variable_source::{SourcePortError, SourcePortResult, VariableSourcePort};
