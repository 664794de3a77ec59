//! Resolution of path templates into authenticated raw-content URLs.

use std::fmt;

use url::Url;

use super::settings::ConfigSettings;

/// Name of the query parameter carrying the OAuth client id.
pub const CLIENT_ID_PARAM: &str = "client_id";
/// Name of the query parameter carrying the OAuth client secret.
pub const CLIENT_SECRET_PARAM: &str = "client_secret";

const REDACTED: &str = "***";

/// A fully resolved, authenticated URL of a variable document.
///
/// `Display` and `Debug` never show the client secret; use [`SourceUrl::url`]
/// to get the real request URL.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceUrl {
    url: Url,
}

impl SourceUrl {
    /// Resolve a path template against the repository described by `settings`.
    ///
    /// Produces `{base}/{owner}/{repo}/{branch}/{path}` with the deployment
    /// name substituted into the template and the credentials attached as
    /// `client_id`/`client_secret` query parameters.
    ///
    /// A query or fragment written in the template is kept as such; the
    /// template's own query parameters come before the credentials.
    pub fn resolve(settings: &ConfigSettings, path_template: &str) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(&settings.base_url)?;

        let resolved = settings.resolve_path(path_template);
        let (rest, fragment) = match resolved.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (resolved.as_str(), None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!(
            "{base_path}/{}/{}/{}/{}",
            settings.owner.trim_matches('/'),
            settings.repo_name.trim_matches('/'),
            settings.branch.trim_matches('/'),
            path.trim_start_matches('/'),
        ));

        url.set_query(query.filter(|q| !q.is_empty()));
        url.set_fragment(fragment);
        url.query_pairs_mut()
            .append_pair(CLIENT_ID_PARAM, &settings.client_id)
            .append_pair(CLIENT_SECRET_PARAM, &settings.client_secret);

        Ok(Self { url })
    }

    /// The request URL, credentials included.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The request URL without its query string.
    pub fn location(&self) -> String {
        let mut location = self.url.clone();
        location.set_query(None);
        location.to_string()
    }

    /// The URL with the client secret masked, suitable for logs and errors.
    pub fn redacted(&self) -> String {
        let mut redacted = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(name, value)| {
                let value = if name == CLIENT_SECRET_PARAM {
                    REDACTED.to_string()
                } else {
                    value.into_owned()
                };
                (name.into_owned(), value)
            })
            .collect();

        redacted.set_query(None);
        if !pairs.is_empty() {
            redacted.query_pairs_mut().extend_pairs(pairs);
        }
        redacted.to_string()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceUrl").field(&self.redacted()).finish()
    }
}
