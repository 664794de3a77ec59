#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultRawClient is meant to be
// used through the VariableSourcePort trait, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRawClient;

// Configuration
pub use config::{DEFAULT_TIMEOUT_SECS, RawClientConfig};

// Errors surfaced while constructing the client
pub use error::{GithubError, GithubResult};

// Silence unused dev-dependency warnings; integration tests use these
#[cfg(test)]
use tiny_http as _;
#[cfg(test)]
use tokio_test as _;
