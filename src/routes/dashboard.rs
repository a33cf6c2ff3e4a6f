//! Dashboard page — aggregate alumni statistics.

use axum::extract::State;
use axum::response::Response;

use super::auth::{self, AdminSession};
use crate::state::AppState;
use crate::templates::{self, DashboardTemplate, ErrorTemplate};

/// `GET /dashboard` — render the statistics widgets from `/admin/stats`.
pub async fn dashboard_page(State(state): State<AppState>, session: AdminSession) -> Response {
    match state.api.stats(&session.token).await {
        Ok(stats) => templates::render(&DashboardTemplate { admin_name: session.display_name(), stats }),
        Err(e) if e.is_unauthorized() => auth::expire_session(&state),
        Err(e) => {
            tracing::error!(error = %e, "stats fetch failed");
            templates::render_error(&ErrorTemplate::from_api(&e))
        }
    }
}
