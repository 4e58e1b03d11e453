use config::Config;
use log::info;
use social_auth::error::{config_error, ConfigErrorKind};
use social_auth::http::ClientBuilder;
use social_auth::providers::github;
use social_auth::{Error as AuthError, Pass};
use std::sync::Arc;
use std::time::Duration;

pub mod config;
pub mod logging;

// Service-level state shared read-only by every request.
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub github: Arc<dyn Pass>,
}

impl AppState {
    pub fn new(app_config: Config, github: Arc<dyn Pass>) -> Self {
        Self {
            config: app_config,
            github,
        }
    }

    pub fn github_pass(&self) -> &dyn Pass {
        self.github.as_ref()
    }
}

/// Builds the GitHub login pass from the GitHub settings in `config`.
///
/// Fails when the OAuth app credentials are missing or a GitHub server URL is unusable.
pub fn init_github_pass(config: &Config) -> Result<github::Pass, AuthError> {
    let app = config.github_app().ok_or_else(|| {
        config_error(ConfigErrorKind::MissingCredentials, "GITHUB_APP is not set")
    })?;
    let key = config.github_key().ok_or_else(|| {
        config_error(ConfigErrorKind::MissingCredentials, "GITHUB_KEY is not set")
    })?;

    info!(
        "GitHub pass config: app={}, auth_url={}, api_url={}, timeout={}s",
        app,
        config.github_auth_url(),
        config.github_api_url(),
        config.http_timeout_secs,
    );

    let pass_config = github::Config::new(app, key)
        .with_auth_base_url(config.github_auth_url().to_string())
        .with_api_base_url(config.github_api_url().to_string());

    let http_client = ClientBuilder::new()
        .with_timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    github::Pass::with_client(pass_config, http_client)
}
