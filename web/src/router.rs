use crate::{
    controller::{health_check_controller, social_login_controller},
    middleware::version::attach_version,
    AppState,
};
use axum::{middleware::from_fn, routing::get, Router};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Social Login API"
        ),
        paths(
            health_check_controller::health_check,
            social_login_controller::github_callback,
        ),
        tags(
            (name = "social_login", description = "GitHub social login callbacks")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(social_login_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(from_fn(attach_version))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

/// Routes for provider callbacks. No auth: the user arrives here from the provider.
fn social_login_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/auth/github/callback",
            get(social_login_controller::github_callback),
        )
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::version::X_TAKES_VERSION;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use clap::Parser;
    use mockito::{Matcher, Server, ServerGuard};
    use service::config::Config;
    use std::sync::Arc;
    use tower::ServiceExt;

    const TOKEN_XML: &str = "<OAuth><access_token>T</access_token></OAuth>";

    // Every env-backed setting is passed explicitly so nothing leaks in from
    // the shell or `.env`. Later `extra_args` override these.
    fn app_state(github_url: &str, extra_args: &[&str]) -> AppState {
        let mut args = vec![
            "social_login_rs",
            "--allowed-origins",
            "http://localhost:3000",
            "--github-app",
            "app-id",
            "--github-key",
            "app-secret",
            "--github-auth-url",
            github_url,
            "--github-api-url",
            github_url,
            "--public-base-url",
            "",
            "--http-timeout-secs",
            "30",
            "--interface",
            "127.0.0.1",
            "--port",
            "4000",
            "--log-level-filter",
            "INFO",
            "--runtime-env",
            "development",
        ];
        args.extend_from_slice(extra_args);

        let config = Config::parse_from(args);
        let pass = service::init_github_pass(&config).unwrap();
        AppState::new(config, Arc::new(pass))
    }

    async fn github_server() -> ServerGuard {
        Server::new_async().await
    }

    async fn send_get(app: Router, uri: &str, host: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(host) = host {
            request = request.header("host", host);
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = github_server().await;
        let app = define_routes(app_state(&server.url(), &[]));

        let response = send_get(app, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_TAKES_VERSION));
        assert_eq!(body_string(response).await, "healthy");
    }

    #[tokio::test]
    async fn test_github_callback_returns_identity() {
        let mut server = github_server().await;
        let url = server.url();
        let token = server
            .mock("POST", "/login/oauth/access_token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "redirect_uri".to_string(),
                    "http://login.test/auth/github/callback?code=abc".to_string(),
                ),
                Matcher::UrlEncoded("code".to_string(), "abc".to_string()),
            ]))
            .with_status(200)
            .with_body(TOKEN_XML)
            .create_async()
            .await;
        let user = server
            .mock("GET", "/user")
            .match_header("authorization", "token T")
            .with_status(200)
            .with_body(r#"{"id":42,"login":"alice","avatar_url":"http://x/a.png"}"#)
            .create_async()
            .await;
        let app = define_routes(app_state(&url, &[]));

        let response = send_get(app, "/auth/github/callback?code=abc", Some("login.test")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_TAKES_VERSION));
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "urn": "urn:github:42",
                "properties": {"login": "alice", "avatar": "http://x/a.png"}
            })
        );
        token.assert_async().await;
        user.assert_async().await;
    }

    #[tokio::test]
    async fn test_github_callback_uses_public_base_url() {
        let mut server = github_server().await;
        let url = server.url();
        let token = server
            .mock("POST", "/login/oauth/access_token")
            .match_body(Matcher::UrlEncoded(
                "redirect_uri".to_string(),
                "https://login.example.com/auth/github/callback?code=abc".to_string(),
            ))
            .with_status(200)
            .with_body(TOKEN_XML)
            .create_async()
            .await;
        let _user = server
            .mock("GET", "/user")
            .with_status(200)
            .with_body(r#"{"id":7}"#)
            .create_async()
            .await;
        let app = define_routes(app_state(
            &url,
            &["--public-base-url", "https://login.example.com/"],
        ));

        let response = send_get(app, "/auth/github/callback?code=abc", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        token.assert_async().await;
    }

    #[tokio::test]
    async fn test_github_callback_without_code_is_bad_request() {
        let mut server = github_server().await;
        let url = server.url();
        let token = server
            .mock("POST", "/login/oauth/access_token")
            .expect(0)
            .create_async()
            .await;
        let app = define_routes(app_state(&url, &[]));

        let response = send_get(app, "/auth/github/callback", Some("login.test")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            "code is not provided by Github"
        );
        token.assert_async().await;
    }

    #[tokio::test]
    async fn test_github_callback_upstream_failure_is_bad_gateway() {
        let mut server = github_server().await;
        let url = server.url();
        let _token = server
            .mock("POST", "/login/oauth/access_token")
            .with_status(500)
            .create_async()
            .await;
        let user = server.mock("GET", "/user").expect(0).create_async().await;
        let app = define_routes(app_state(&url, &[]));

        let response = send_get(app, "/auth/github/callback?code=abc", Some("login.test")).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers().contains_key(X_TAKES_VERSION));
        user.assert_async().await;
    }

    #[tokio::test]
    async fn test_github_callback_without_host_is_bad_request() {
        let server = github_server().await;
        let app = define_routes(app_state(&server.url(), &[]));

        let response = send_get(app, "/auth/github/callback?code=abc", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
