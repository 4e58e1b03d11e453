use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use social_auth::error::{Error as AuthError, ErrorKind as AuthErrorKind, LoginErrorKind};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Auth(AuthError),
    Web(WebErrorKind),
}

/// Errors raised by the web layer itself, before or after a pass runs.
#[derive(Debug, PartialEq)]
pub enum WebErrorKind {
    /// The request can't be turned into a callback URI.
    Input,
    /// A pass finished without producing an identity.
    Unauthenticated,
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants:
// https://docs.rs/http/latest/http/status/struct.StatusCode.html
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Auth(err) => match err.error_kind {
                AuthErrorKind::Login(LoginErrorKind::MissingCodeParameter) => {
                    let message = err
                        .source
                        .map(|source| source.to_string())
                        .unwrap_or_else(|| "BAD REQUEST".to_string());
                    info!("Rejecting login callback: {message}");
                    (StatusCode::BAD_REQUEST, message).into_response()
                }
                AuthErrorKind::Login(_) | AuthErrorKind::Http(_) => {
                    warn!("Login failed upstream: {err}");
                    (StatusCode::BAD_GATEWAY, "BAD GATEWAY").into_response()
                }
                AuthErrorKind::Config(_) => {
                    error!("Login pass is misconfigured: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
            Error::Web(WebErrorKind::Input) => {
                (StatusCode::BAD_REQUEST, "BAD REQUEST").into_response()
            }
            Error::Web(WebErrorKind::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED").into_response()
            }
        }
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}
