//! Login pass trait and types.

use async_trait::async_trait;
use http::response::Parts;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::identity::Identity;

/// Known social login providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Github,
}

impl ProviderKind {
    /// Get the provider identifier string, as used in identity URNs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Github => "github",
        }
    }
}

/// Trait for social login passes.
///
/// A hosting pipeline calls `enter` when a provider redirects the user back with an
/// authorization code, and `exit` on the way out with the response it is about to
/// send. Each provider is a sibling implementation of this trait.
#[async_trait]
pub trait Pass: Send + Sync {
    /// Get the provider kind.
    fn provider(&self) -> ProviderKind;

    /// Complete the login flow for an incoming callback request.
    ///
    /// # Arguments
    ///
    /// * `href` - Full absolute URI of the callback request, query string included
    ///
    /// # Returns
    ///
    /// The identity of the user who logged in.
    async fn enter(&self, href: &Url) -> Result<Option<Identity>, Error>;

    /// Finalize the outgoing response head for an identity produced by `enter`.
    fn exit(&self, response: Parts, identity: &Identity) -> Parts;
}
