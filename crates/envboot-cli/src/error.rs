//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and their mapping
//! to exit codes.

use envboot_core::SettingsError;
use envboot_github::GithubError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or both variable documents were not applied in strict mode.
    #[error("Bootstrap incomplete: {0}")]
    Incomplete(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Incomplete(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }

    /// Exit code for any error returned from a handler.
    pub fn exit_code_for(err: &anyhow::Error) -> i32 {
        err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<GithubError> for CliError {
    fn from(err: GithubError) -> Self {
        CliError::Config(format!("Cannot create HTTP client: {err}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Incomplete("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_settings_error_is_config() {
        let err: CliError = SettingsError::Missing {
            key: "githubUser".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("githubUser"));
    }

    #[test]
    fn test_exit_code_for_anyhow() {
        let wrapped = anyhow::Error::new(CliError::Io("disk".into()));
        assert_eq!(CliError::exit_code_for(&wrapped), 74);

        let other = anyhow::anyhow!("something else");
        assert_eq!(CliError::exit_code_for(&other), 1);
    }
}
