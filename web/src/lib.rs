use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method,
};
use log::*;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use service::AppState;

pub use self::error::{Error, Result};

mod controller;
pub mod error;
mod extractors;
mod middleware;
pub mod router;

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let listen_addr = format!("{}:{}", interface, app_state.config.port);

    info!("CORS allowed origins: {:?}", app_state.config.allowed_origins);
    let cors_layer = cors_layer(&app_state.config.allowed_origins);

    let router = router::define_routes(app_state).layer(cors_layer);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Server starting... listening for connections on http://{listen_addr}");

    axum::serve(listener, router).await
}

/// Builds the CORS layer for the configured origins.
///
/// A literal `*` allows any origin without credentials. Otherwise only the listed
/// origins are allowed, with credentials, and unparseable entries are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    if origins.iter().any(|origin| origin.trim() == "*") {
        warn!("Wildcard CORS origin configured, allowing any origin without credentials");
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    layer
        .allow_credentials(true)
        .allow_origin(allowed_origins)
}
