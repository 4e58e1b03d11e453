use log::{error, info};
use service::{config::Config, logging::Logger, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting up social login server [{} environment]",
        config.runtime_env()
    );

    let github = match service::init_github_pass(&config) {
        Ok(pass) => Arc::new(pass),
        Err(e) => {
            error!("Failed to set up the GitHub login pass: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config, github);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
