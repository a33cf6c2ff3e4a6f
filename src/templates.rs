//! Askama templates for server-side rendering.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::services::api::{AdminStats, AlumniRecord, ApiError};
use crate::services::table::Page;

/// Render a template, mapping render failures to a bare 500.
pub fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Render the error page with its status code on the response.
pub fn render_error(template: &ErrorTemplate) -> Response {
    let status = StatusCode::from_u16(template.code).unwrap_or(StatusCode::BAD_GATEWAY);
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// Echoed back so a failed attempt does not wipe the field.
    pub email: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_name: String,
    pub stats: AdminStats,
}

/// Sortable column header, precomputed by the handler.
pub struct ColumnLink {
    pub label: &'static str,
    pub href: String,
    /// Direction marker shown next to the active sort column.
    pub marker: &'static str,
}

#[derive(Template)]
#[template(path = "alumni.html")]
pub struct AlumniTemplate {
    pub admin_name: String,
    pub q: String,
    pub columns: Vec<ColumnLink>,
    pub page: Page<AlumniRecord>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

#[derive(Template)]
#[template(path = "broadcast.html")]
pub struct BroadcastTemplate {
    pub admin_name: String,
    pub error: Option<String>,
    pub success: Option<String>,
    pub subject: String,
    pub message: String,
    pub group_alumni: bool,
    pub group_custom: bool,
    pub custom_emails: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub code: u16,
    pub message: String,
}

impl ErrorTemplate {
    #[must_use]
    pub fn from_api(error: &ApiError) -> Self {
        match error {
            ApiError::Network(_) => Self { code: 502, message: "Network error occurred".to_owned() },
            ApiError::Rejected { status, message } => Self { code: *status, message: message.clone() },
        }
    }
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
