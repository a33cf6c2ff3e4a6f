mod config;
mod routes;
mod services;
mod state;
mod templates;

use std::sync::Arc;

use crate::services::api::AdminApi;
use crate::services::session::{FileBackend, SessionManager};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let sessions = SessionManager::new(Arc::new(FileBackend::new(config.session_file.clone())));
    let api = AdminApi::new(config.api_url.clone());
    let state = state::AppState::new(sessions, api, config.cookie_secure);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api_url = %config.api_url, "alumni admin dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
