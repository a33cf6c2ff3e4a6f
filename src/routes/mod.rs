//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page handler takes the `AdminSession` extractor from
//! `routes::auth`; anonymous requests are redirected to the login page
//! before those handler bodies run.

pub mod alumni;
pub mod auth;
pub mod broadcast;
pub mod dashboard;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::dashboard_page))
        .route("/alumni", get(alumni::alumni_page))
        .route("/broadcast", get(broadcast::compose_page).post(broadcast::send))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::temporary("/dashboard")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
