//! GitHub pass configuration.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{config_error, ConfigErrorKind, Error, ErrorKind};

/// Default GitHub OAuth server.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://github.com";
/// Default GitHub API server.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// OAuth app credentials and the servers to talk to.
///
/// Built once at startup and shared read-only by every login attempt.
/// Two configs are equal when their app and key match; the servers do not
/// take part in equality.
#[derive(Debug, Clone)]
pub struct Config {
    app: String,
    key: SecretString,
    auth_base_url: String,
    api_base_url: String,
}

impl Config {
    /// Create a configuration that talks to github.com.
    ///
    /// # Arguments
    ///
    /// * `app` - GitHub OAuth app client ID
    /// * `key` - GitHub OAuth app client secret
    pub fn new(app: String, key: String) -> Self {
        Self {
            app,
            key: SecretString::new(key),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Override the OAuth server (the host serving `/login/oauth/access_token`).
    pub fn with_auth_base_url(mut self, auth_base_url: String) -> Self {
        self.auth_base_url = auth_base_url;
        self
    }

    /// Override the API server (the host serving `/user`).
    pub fn with_api_base_url(mut self, api_base_url: String) -> Self {
        self.api_base_url = api_base_url;
        self
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn key(&self) -> &SecretString {
        &self.key
    }

    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Access token exchange endpoint.
    pub fn token_url(&self) -> Result<Url, Error> {
        endpoint(&self.auth_base_url, &["login", "oauth", "access_token"])
    }

    /// Authenticated user endpoint.
    pub fn user_url(&self) -> Result<Url, Error> {
        endpoint(&self.api_base_url, &["user"])
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.app == other.app && self.key.expose_secret() == other.key.expose_secret()
    }
}

impl Eq for Config {}

/// Append path segments to a base URL, tolerating a trailing slash on the base.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Error> {
    let mut url = Url::parse(base).map_err(|e| Error {
        source: Some(Box::new(e)),
        error_kind: ErrorKind::Config(ConfigErrorKind::InvalidUrl),
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            config_error(
                ConfigErrorKind::InvalidUrl,
                &format!("{} cannot be used as a base URL", base),
            )
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
