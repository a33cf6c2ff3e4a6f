//! Broadcast mail page — compose and send through the remote API.

use axum::extract::{Form, State};
use axum::response::Response;
use serde::Deserialize;

use super::auth::{self, AdminSession};
use crate::services::api::{ApiError, BroadcastRequest};
use crate::state::AppState;
use crate::templates::{self, BroadcastTemplate};

pub const GROUP_ALUMNI: &str = "alumni";
pub const GROUP_CUSTOM: &str = "custom";

#[derive(Debug, Default, Deserialize)]
pub struct BroadcastForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Checkbox fields: present in the form body iff checked.
    #[serde(default)]
    pub group_alumni: Option<String>,
    #[serde(default)]
    pub group_custom: Option<String>,
    #[serde(default)]
    pub custom_emails: String,
}

/// `GET /broadcast` — empty compose form.
pub async fn compose_page(session: AdminSession) -> Response {
    templates::render(&blank_page(session.display_name()))
}

/// `POST /broadcast` — validate, send, and re-render with the outcome.
pub async fn send(
    State(state): State<AppState>,
    session: AdminSession,
    Form(form): Form<BroadcastForm>,
) -> Response {
    let request = match validate(&form) {
        Ok(request) => request,
        Err(message) => {
            return templates::render(&echo_page(session.display_name(), &form, Some(message), None));
        }
    };

    match state.api.broadcast(&session.token, &request).await {
        // Success resets the form, mirroring the dashboard's long-standing
        // behavior of clearing a sent broadcast.
        Ok(message) => {
            let mut page = blank_page(session.display_name());
            page.success = Some(message);
            templates::render(&page)
        }
        Err(e) if e.is_unauthorized() => auth::expire_session(&state),
        Err(ApiError::Rejected { message, .. }) => {
            templates::render(&echo_page(session.display_name(), &form, Some(message), None))
        }
        Err(ApiError::Network(e)) => {
            tracing::warn!(error = %e, "broadcast send failed");
            templates::render(&echo_page(
                session.display_name(),
                &form,
                Some("Network error occurred. Please try again.".to_owned()),
                None,
            ))
        }
    }
}

fn blank_page(admin_name: String) -> BroadcastTemplate {
    BroadcastTemplate {
        admin_name,
        error: None,
        success: None,
        subject: String::new(),
        message: String::new(),
        group_alumni: false,
        group_custom: false,
        custom_emails: String::new(),
    }
}

fn echo_page(
    admin_name: String,
    form: &BroadcastForm,
    error: Option<String>,
    success: Option<String>,
) -> BroadcastTemplate {
    BroadcastTemplate {
        admin_name,
        error,
        success,
        subject: form.subject.clone(),
        message: form.message.clone(),
        group_alumni: form.group_alumni.is_some(),
        group_custom: form.group_custom.is_some(),
        custom_emails: form.custom_emails.clone(),
    }
}

/// The same checks the dashboard has always enforced before handing a
/// broadcast to the API.
fn validate(form: &BroadcastForm) -> Result<BroadcastRequest, String> {
    if form.subject.trim().is_empty() {
        return Err("Subject is required".to_owned());
    }
    if form.message.trim().is_empty() {
        return Err("Message content is required".to_owned());
    }

    let mut groups = Vec::new();
    if form.group_alumni.is_some() {
        groups.push(GROUP_ALUMNI.to_owned());
    }
    if form.group_custom.is_some() {
        groups.push(GROUP_CUSTOM.to_owned());
    }
    if groups.is_empty() {
        return Err("Please select at least one recipient group".to_owned());
    }

    let custom_emails = if form.group_custom.is_some() {
        let emails = split_emails(&form.custom_emails);
        if emails.is_empty() {
            return Err("Please enter at least one email address for custom recipients".to_owned());
        }
        emails
    } else {
        Vec::new()
    };

    Ok(BroadcastRequest {
        subject: form.subject.clone(),
        message: form.message.clone(),
        groups,
        custom_emails,
    })
}

fn split_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;
