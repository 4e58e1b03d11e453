use crate::error::WebErrorKind;
use crate::{AppState, Error};
use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts},
};
use log::*;
use url::Url;

/// The absolute URI a provider redirected the user to, query string included.
///
/// Rebuilt from `public_base_url` when configured, otherwise from the Host header.
pub(crate) struct CallbackHref(pub Url);

impl FromRequestParts<AppState> for CallbackHref {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let origin = match state.config.public_base_url() {
            Some(base) => base.to_string(),
            None => {
                let host = parts
                    .headers
                    .get(HOST)
                    .and_then(|host| host.to_str().ok())
                    .ok_or_else(|| {
                        warn!("Callback request has no usable Host header");
                        Error::Web(WebErrorKind::Input)
                    })?;
                format!("http://{host}")
            }
        };

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let href = Url::parse(&format!("{origin}{path_and_query}")).map_err(|e| {
            warn!("Unable to rebuild callback URI from {origin}{path_and_query}: {e}");
            Error::Web(WebErrorKind::Input)
        })?;

        trace!("Callback URI: {href}");

        Ok(CallbackHref(href))
    }
}
