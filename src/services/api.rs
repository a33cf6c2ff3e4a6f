//! Remote admin API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard owns no alumni data. Every protected view is a display over
//! this API, authenticated with the stored opaque token as a bearer header.
//! The API enforces authorization on every call; the dashboard's own guard
//! is only a UX fast-path in front of it.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// True when the API refused the stored token. Callers respond by
    /// clearing the session and redirecting to the login page.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }
}

/// `POST /admin/login` success body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Admin profile record. Opaque to the dashboard: stored as-is and only
    /// ever read back for display.
    pub admin: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: i64,
    pub new_users: i64,
    pub percentage_growth: f64,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    stats: AdminStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlumniRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct AlumniResponse {
    alumni: Vec<AlumniRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
    pub subject: String,
    pub message: String,
    pub groups: Vec<String>,
    pub custom_emails: Vec<String>,
}

/// Generic `{ "message": ... }` body used by the API for both rejections
/// and broadcast confirmations.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// HTTP client for the remote admin API.
#[derive(Clone)]
pub struct AdminApi {
    base_url: String,
    client: reqwest::Client,
}

impl AdminApi {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /admin/login` — exchange credentials for a token and profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let resp = self
            .client
            .post(self.url("/admin/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(resp, "Login failed").await
    }

    /// `GET /admin/stats` — aggregate alumni statistics.
    pub async fn stats(&self, token: &str) -> Result<AdminStats, ApiError> {
        let resp = self
            .client
            .get(self.url("/admin/stats"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: StatsResponse = Self::decode(resp, "Failed to fetch statistics").await?;
        Ok(body.stats)
    }

    /// `GET /admin/alumni` — full alumni roster.
    pub async fn list_alumni(&self, token: &str) -> Result<Vec<AlumniRecord>, ApiError> {
        let resp = self
            .client
            .get(self.url("/admin/alumni"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: AlumniResponse = Self::decode(resp, "Failed to fetch alumni").await?;
        Ok(body.alumni)
    }

    /// `POST /admin/broadcast-email` — queue a broadcast; returns the API's
    /// confirmation message.
    pub async fn broadcast(&self, token: &str, request: &BroadcastRequest) -> Result<String, ApiError> {
        let resp = self
            .client
            .post(self.url("/admin/broadcast-email"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: MessageBody = Self::decode(resp, "Failed to send broadcast email").await?;
        Ok(body.message)
    }

    /// Shared response handling: non-2xx carries `{ message }` (with a
    /// per-endpoint fallback when the body is not in that shape), 2xx is
    /// decoded into the expected type.
    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(Self::rejection(status.as_u16(), &body, fallback));
        }
        serde_json::from_str(&body).map_err(|_| ApiError::Network(format!("unexpected response: {body}")))
    }

    fn rejection(status: u16, body: &str, fallback: &str) -> ApiError {
        let message = serde_json::from_str::<MessageBody>(body)
            .map_or_else(|_| fallback.to_owned(), |m| m.message);
        ApiError::Rejected { status, message }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
