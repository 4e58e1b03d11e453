//! Error types for the `social-auth` crate.
//!
//! Follows the same pattern as the rest of the workspace: a root Error struct holding
//! an error kind tree and an optional source for error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for social-auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in social-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Login(LoginErrorKind),
    Http(HttpErrorKind),
    Config(ConfigErrorKind),
}

/// Errors from a login attempt against a provider.
#[derive(Debug, PartialEq)]
pub enum LoginErrorKind {
    /// The callback request carried no `code` query parameter.
    MissingCodeParameter,
    /// One of the provider calls answered with something unusable.
    Upstream(UpstreamErrorKind),
    /// The provider's user payload lacks a required field or has the wrong type.
    MalformedProviderPayload,
}

/// Ways a provider response can be rejected.
#[derive(Debug, PartialEq)]
pub enum UpstreamErrorKind {
    UnexpectedStatus(u16),
    MalformedBody,
    MissingAccessToken,
}

/// Errors from HTTP client operations.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

/// Errors from adapter configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    InvalidUrl,
    MissingCredentials,
}

impl Error {
    /// True when the failure came from a provider response (status or body).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.error_kind,
            ErrorKind::Login(LoginErrorKind::Upstream(_))
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Login(kind) => write!(f, "Login error: {:?}", kind)?,
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind)?,
            ErrorKind::Config(kind) => write!(f, "Config error: {:?}", kind)?,
        }
        match &self.source {
            Some(source) => write!(f, " ({})", source),
            None => Ok(()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create login errors.
pub fn login_error(kind: LoginErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Login(kind),
    }
}

/// Helper function to create upstream (provider response) errors.
pub fn upstream_error(kind: UpstreamErrorKind, message: &str) -> Error {
    login_error(LoginErrorKind::Upstream(kind), message)
}

/// Helper function to create configuration errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}
