//! Bootstrap settings and how they are read from the environment store.

use std::fmt;

use thiserror::Error;

use crate::ports::EnvironmentStore;

/// Branch that variable documents are read from unless overridden.
pub const DEFAULT_BRANCH: &str = "master";

/// Placeholder in path templates that is replaced with the deployment name.
pub const ENVIRONMENT_PLACEHOLDER: &str = "{0}";

/// Store keys the settings are read from.
pub mod keys {
    pub const BASE_URL: &str = "baseGithubUrl";
    pub const OWNER: &str = "githubUser";
    pub const REPO_NAME: &str = "githubRepoName";
    pub const CLIENT_ID: &str = "githubClientId";
    pub const CLIENT_SECRET: &str = "githubClientSecret";
    pub const GLOBAL_PATH: &str = "globalVariablesPath";
    pub const SHARED_PATH: &str = "sharedVariablesPath";
    pub const ENVIRONMENT: &str = "environment";

    /// Every key required by [`super::ConfigSettings::from_store`], in load order.
    pub const ALL: [&str; 8] = [
        BASE_URL,
        OWNER,
        REPO_NAME,
        CLIENT_ID,
        CLIENT_SECRET,
        GLOBAL_PATH,
        SHARED_PATH,
        ENVIRONMENT,
    ];
}

/// Errors raised while reading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A single required setting is missing or blank.
    #[error("Missing required setting '{key}'")]
    Missing {
        /// The store key that was not set
        key: String,
    },

    /// Several required settings are missing or blank.
    #[error("Missing required settings: {}", .keys.join(", "))]
    MissingMany {
        /// The store keys that were not set, in load order
        keys: Vec<String>,
    },
}

/// Settings read once at the start of a bootstrap run.
///
/// Treated as read-only for the duration of the run.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigSettings {
    /// Raw-content host, e.g. `https://raw.githubusercontent.com/`
    pub base_url: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo_name: String,
    /// OAuth client id sent as the `client_id` query parameter
    pub client_id: String,
    /// OAuth client secret sent as the `client_secret` query parameter
    pub client_secret: String,
    /// Deployment name substituted into the path templates
    pub environment: String,
    /// Path template of the global variables document
    pub global_path_template: String,
    /// Path template of the shared variables document
    pub shared_path_template: String,
    /// Branch the documents are read from
    pub branch: String,
}

impl ConfigSettings {
    /// Build settings from explicit values, reading from the default branch.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo_name: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: impl Into<String>,
        global_path_template: impl Into<String>,
        shared_path_template: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            owner: owner.into(),
            repo_name: repo_name.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment: environment.into(),
            global_path_template: global_path_template.into(),
            shared_path_template: shared_path_template.into(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Read from a different branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Read every required setting from the environment store.
    ///
    /// Blank values count as missing. All missing keys are reported at once.
    pub fn from_store<S: EnvironmentStore + ?Sized>(store: &S) -> Result<Self, SettingsError> {
        Self::from_lookup(|key| store.get(key))
    }

    /// Read every required setting through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let values = keys::ALL.map(|key| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(key.to_string());
                String::new()
            }
        });

        match missing.len() {
            0 => {}
            1 => {
                return Err(SettingsError::Missing {
                    key: missing.remove(0),
                });
            }
            _ => return Err(SettingsError::MissingMany { keys: missing }),
        }

        let [
            base_url,
            owner,
            repo_name,
            client_id,
            client_secret,
            global_path_template,
            shared_path_template,
            environment,
        ] = values;

        Ok(Self::new(
            base_url,
            owner,
            repo_name,
            client_id,
            client_secret,
            environment,
            global_path_template,
            shared_path_template,
        ))
    }

    /// Substitute the deployment name into a path template.
    ///
    /// Only the first placeholder is replaced. A template without a
    /// placeholder is returned unchanged.
    pub fn resolve_path(&self, template: &str) -> String {
        template.replacen(ENVIRONMENT_PLACEHOLDER, &self.environment, 1)
    }
}

impl fmt::Debug for ConfigSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSettings")
            .field("base_url", &self.base_url)
            .field("owner", &self.owner)
            .field("repo_name", &self.repo_name)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("environment", &self.environment)
            .field("global_path_template", &self.global_path_template)
            .field("shared_path_template", &self.shared_path_template)
            .field("branch", &self.branch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_lookup() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (keys::BASE_URL, "https://raw.githubusercontent.com/"),
            (keys::OWNER, "acme"),
            (keys::REPO_NAME, "cfg"),
            (keys::CLIENT_ID, "id-123"),
            (keys::CLIENT_SECRET, "s3cret"),
            (keys::GLOBAL_PATH, "envs/{0}/global.json"),
            (keys::SHARED_PATH, "envs/{0}/shared.json"),
            (keys::ENVIRONMENT, "prod"),
        ])
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let values = full_lookup();
        let settings =
            ConfigSettings::from_lookup(|k| values.get(k).map(ToString::to_string)).unwrap();

        assert_eq!(settings.base_url, "https://raw.githubusercontent.com/");
        assert_eq!(settings.owner, "acme");
        assert_eq!(settings.repo_name, "cfg");
        assert_eq!(settings.client_id, "id-123");
        assert_eq!(settings.client_secret, "s3cret");
        assert_eq!(settings.environment, "prod");
        assert_eq!(settings.global_path_template, "envs/{0}/global.json");
        assert_eq!(settings.shared_path_template, "envs/{0}/shared.json");
        assert_eq!(settings.branch, DEFAULT_BRANCH);
    }

    #[test]
    fn test_single_missing_key() {
        let mut values = full_lookup();
        values.remove(keys::OWNER);
        let err = ConfigSettings::from_lookup(|k| values.get(k).map(ToString::to_string))
            .unwrap_err();
        assert_eq!(
            err,
            SettingsError::Missing {
                key: keys::OWNER.to_string()
            }
        );
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut values = full_lookup();
        values.insert(keys::ENVIRONMENT, "   ");
        values.insert(keys::CLIENT_SECRET, "");
        let err = ConfigSettings::from_lookup(|k| values.get(k).map(ToString::to_string))
            .unwrap_err();
        assert_eq!(
            err,
            SettingsError::MissingMany {
                keys: vec![
                    keys::CLIENT_SECRET.to_string(),
                    keys::ENVIRONMENT.to_string()
                ]
            }
        );
        assert!(err.to_string().contains("githubClientSecret, environment"));
    }

    #[test]
    fn test_resolve_path_replaces_first_placeholder() {
        let settings = ConfigSettings::new("b", "o", "r", "i", "s", "staging", "g", "s");
        assert_eq!(
            settings.resolve_path("envs/{0}/global.json"),
            "envs/staging/global.json"
        );
        assert_eq!(settings.resolve_path("{0}/{0}.json"), "staging/{0}.json");
        assert_eq!(settings.resolve_path("common.json"), "common.json");
    }

    #[test]
    fn test_debug_hides_secret() {
        let settings = ConfigSettings::new("b", "o", "r", "i", "topsecret", "e", "g", "s");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("topsecret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_with_branch() {
        let settings =
            ConfigSettings::new("b", "o", "r", "i", "s", "e", "g", "s").with_branch("main");
        assert_eq!(settings.branch, "main");
    }
}
