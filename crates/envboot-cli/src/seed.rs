//! Seeding the environment store before a run.
//!
//! Sources are applied in order so later ones win: process environment
//! variables named after the settings keys, an exported environment file,
//! then explicit `--var` pairs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use envboot_core::{EnvironmentStore, VariableRecord, keys};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// An exported environment file.
///
/// Either an export object with a `values` list (disabled entries are
/// skipped) or a bare variable document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Export { values: Vec<ExportedVariable> },
    Records(Vec<VariableRecord>),
}

#[derive(Debug, Deserialize)]
struct ExportedVariable {
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

/// Parse a `KEY=VALUE` argument.
pub fn parse_key_val(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{arg}'"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Copy every settings key that is present in the process environment.
pub fn seed_from_process_env(store: &mut dyn EnvironmentStore) -> usize {
    seed_from_lookup(store, |key| std::env::var(key).ok())
}

/// Copy every settings key that `lookup` can resolve.
pub fn seed_from_lookup<F>(store: &mut dyn EnvironmentStore, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let mut seeded = 0;
    for key in keys::ALL {
        if let Some(value) = lookup(key) {
            debug!(key, "Seeding from process environment");
            store.set(key, &value);
            seeded += 1;
        }
    }
    seeded
}

/// Parse an exported environment file into ordered key/value pairs.
pub fn parse_seed_document(json: &str) -> Result<Vec<(String, String)>, CliError> {
    let document: SeedDocument = serde_json::from_str(json).map_err(|e| {
        CliError::Arguments(format!(
            "seed file must be an environment export or a variable document: {e}"
        ))
    })?;

    Ok(match document {
        SeedDocument::Export { values } => values
            .into_iter()
            .filter(|v| v.enabled)
            .map(|v| (v.key, v.value))
            .collect(),
        SeedDocument::Records(records) => records.into_iter().map(|r| (r.key, r.value)).collect(),
    })
}

/// Apply an exported environment file to the store.
pub fn seed_from_file(store: &mut dyn EnvironmentStore, path: &Path) -> Result<usize> {
    let json = fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let pairs = parse_seed_document(&json)?;

    for (key, value) in &pairs {
        store.set(key, value);
    }
    debug!(path = %path.display(), count = pairs.len(), "Seeded from file");
    Ok(pairs.len())
}

/// Apply explicit `--var` pairs to the store.
pub fn seed_from_pairs(store: &mut dyn EnvironmentStore, pairs: &[(String, String)]) {
    for (key, value) in pairs {
        store.set(key, value);
    }
}

/// Apply every seed source in order: process environment, seed file, pairs.
pub fn seed_all(
    store: &mut dyn EnvironmentStore,
    seed_file: Option<&Path>,
    pairs: &[(String, String)],
) -> Result<()> {
    seed_from_process_env(store);
    if let Some(path) = seed_file {
        seed_from_file(store, path)?;
    }
    seed_from_pairs(store, pairs);
    Ok(())
}
