use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Response header naming the server version that produced the response.
pub const X_TAKES_VERSION: &str = "x-takes-version";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Attaches the `X-Takes-Version` header to every response passing through.
pub async fn attach_version(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static(X_TAKES_VERSION),
        HeaderValue::from_static(VERSION),
    );
    response
}
