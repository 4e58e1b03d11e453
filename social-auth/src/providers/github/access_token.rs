//! GitHub access token and request authentication.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Access token returned by the code exchange.
///
/// Lives only for the duration of one login attempt.
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token))
    }

    pub fn secret(&self) -> &SecretString {
        &self.0
    }

    /// Apply the token to a request as `Authorization: token <token>`.
    ///
    /// GitHub no longer accepts the token as a query parameter.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("token {}", self.0.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_sets_token_header() {
        let token = AccessToken::new("gho_abc".to_string());
        let request = token
            .authenticate(reqwest::Client::new().get("http://localhost/user"))
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "token gho_abc"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = AccessToken::new("gho_abc".to_string());
        assert!(!format!("{:?}", token).contains("gho_abc"));
    }
}
