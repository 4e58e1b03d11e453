//! GitHub social login pass.
//!
//! Completes the OAuth 2.0 authorization code flow against GitHub:
//! the code from the callback is exchanged for an access token, and the
//! token is used once to read the authenticated user.

mod access_token;
mod config;
mod payload;

pub use access_token::AccessToken;
pub use config::{Config, DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL};

use async_trait::async_trait;
use http::response::Parts;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{
    login_error, upstream_error, Error, ErrorKind, LoginErrorKind, UpstreamErrorKind,
};
use crate::http::ClientBuilder;
use crate::identity::Identity;
use crate::pass::ProviderKind;

const CODE: &str = "code";

/// GitHub OAuth landing/callback pass.
///
/// Immutable after construction; a single instance can serve any number of
/// concurrent logins since every call keeps its token and payload local.
pub struct Pass {
    config: Config,
    token_url: Url,
    user_url: Url,
    http_client: reqwest::Client,
}

impl Pass {
    /// Create a GitHub pass with a default HTTP client.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http_client = ClientBuilder::new().build()?;
        Self::with_client(config, http_client)
    }

    /// Create a GitHub pass that sends its requests through `http_client`.
    ///
    /// Fails when either configured server is not a usable base URL.
    pub fn with_client(config: Config, http_client: reqwest::Client) -> Result<Self, Error> {
        let token_url = config.token_url()?;
        let user_url = config.user_url()?;

        Ok(Self {
            config,
            token_url,
            user_url,
            http_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Exchange the authorization code for an access token.
    ///
    /// # Arguments
    ///
    /// * `home` - The callback URI, sent back to GitHub as `redirect_uri`
    /// * `code` - GitHub authorization code
    async fn token(&self, home: &Url, code: &str) -> Result<AccessToken, Error> {
        let form = [
            ("client_id", self.config.app()),
            ("redirect_uri", home.as_str()),
            ("client_secret", self.config.key().expose_secret().as_str()),
            (CODE, code),
        ];

        debug!("Exchanging GitHub authorization code at {}", self.token_url);

        let response = self
            .http_client
            .post(self.token_url.clone())
            .header(ACCEPT, "application/xml")
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach GitHub token endpoint: {:?}", e);
                Error::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            warn!("GitHub token exchange returned {}: {}", status, error_text);
            return Err(upstream_error(
                UpstreamErrorKind::UnexpectedStatus(status.as_u16()),
                &format!("token exchange returned HTTP {}", status),
            ));
        }

        let body = response.text().await?;
        payload::access_token(&body).inspect_err(|e| {
            warn!("Unusable GitHub token response: {}", e);
        })
    }

    /// Read the user that owns the access token.
    async fn fetch(&self, token: &AccessToken) -> Result<Identity, Error> {
        let request = self
            .http_client
            .get(self.user_url.clone())
            .header(ACCEPT, "application/json");

        let response = token.authenticate(request).send().await.map_err(|e| {
            warn!("Failed to reach GitHub user endpoint: {:?}", e);
            Error::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            warn!("GitHub user fetch returned {}: {}", status, error_text);
            return Err(upstream_error(
                UpstreamErrorKind::UnexpectedStatus(status.as_u16()),
                &format!("user fetch returned HTTP {}", status),
            ));
        }

        let json: Value = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub user response: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Login(LoginErrorKind::Upstream(
                    UpstreamErrorKind::MalformedBody,
                )),
            }
        })?;

        if !json.is_object() {
            return Err(upstream_error(
                UpstreamErrorKind::MalformedBody,
                "GitHub user response is not a JSON object",
            ));
        }

        payload::identity(&json)
    }
}

#[async_trait]
impl crate::pass::Pass for Pass {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Github
    }

    async fn enter(&self, href: &Url) -> Result<Option<Identity>, Error> {
        let code = href
            .query_pairs()
            .find(|(name, _)| name == CODE)
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                login_error(
                    LoginErrorKind::MissingCodeParameter,
                    "code is not provided by Github",
                )
            })?;

        let token = self.token(href, &code).await?;
        let identity = self.fetch(&token).await?;

        info!("GitHub login completed for {}", identity.urn());

        Ok(Some(identity))
    }

    fn exit(&self, response: Parts, _identity: &Identity) -> Parts {
        response
    }
}
