//! Controller for social login callbacks.
//!
//! Drives a provider's pass: `enter` turns the callback into an identity, and the
//! rendered response head goes back through `exit` before it leaves the server.

use crate::error::WebErrorKind;
use crate::extractors::callback_href::CallbackHref;
use crate::{AppState, Error};

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::*;

/// GET /auth/github/callback
///
/// Completes a GitHub login. GitHub redirects the browser here with an
/// authorization code after the user grants access.
#[utoipa::path(
    get,
    path = "/auth/github/callback",
    params(
        ("code" = String, Query, description = "Authorization code issued by GitHub"),
    ),
    responses(
        (status = 200, description = "Identity of the logged-in user as {urn, properties}"),
        (status = 400, description = "code is not provided by Github"),
        (status = 502, description = "GitHub rejected the code or returned an unusable response"),
    )
)]
pub async fn github_callback(
    State(app_state): State<AppState>,
    CallbackHref(href): CallbackHref,
) -> Result<Response, Error> {
    let pass = app_state.github_pass();

    let identity = pass
        .enter(&href)
        .await?
        .ok_or(Error::Web(WebErrorKind::Unauthenticated))?;

    debug!("Identity {} entered through {:?}", identity.urn(), pass.provider());

    let (parts, body) = Json(&identity).into_response().into_parts();
    let parts = pass.exit(parts, &identity);

    Ok(Response::from_parts(parts, body))
}
