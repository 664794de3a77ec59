//! Domain types for bootstrapping an environment from remote variable documents.
//!
//! These are pure domain types with no HTTP or runtime dependencies.

mod record;
mod settings;
mod source_url;

pub use record::{VariableRecord, parse_document};
pub use settings::{
    ConfigSettings, DEFAULT_BRANCH, ENVIRONMENT_PLACEHOLDER, SettingsError, keys,
};
pub use source_url::{CLIENT_ID_PARAM, CLIENT_SECRET_PARAM, SourceUrl};
