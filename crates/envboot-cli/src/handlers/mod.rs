//! Command handlers.
//!
//! Handlers are thin: read settings from the seeded store, call the core
//! bootstrapper, and format output. Output is written to the supplied
//! writer so handlers can be exercised in tests.

pub mod run;
pub mod urls;
