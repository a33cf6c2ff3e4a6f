//! Login, logout, and the session gate for protected pages.
//!
//! ARCHITECTURE
//! ============
//! `AdminSession` is the route guard: protected handlers take it as a
//! parameter, and anonymous requests are redirected to `/login` before any
//! handler body runs. The check is optimistic — the stored token is not
//! re-verified with the API here. A revoked token surfaces as a 401 on the
//! next API call, at which point the calling handler ends the session via
//! [`expire_session`].

use axum::extract::{Form, FromRef, FromRequestParts, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::api::ApiError;
use crate::state::AppState;
use crate::templates::{self, LoginTemplate};

pub const LOGIN_PATH: &str = "/login";
const COOKIE_NAME: &str = "admin_session";

// =============================================================================
// SESSION GUARD
// =============================================================================

/// Session extracted for a protected page. Construction fails with a
/// redirect to the fixed login path when no valid session exists; the
/// originally requested path is not preserved across login.
#[derive(Debug)]
pub struct AdminSession {
    pub token: String,
    pub profile: serde_json::Value,
}

impl AdminSession {
    /// Display name for the signed-in admin, from whatever fields the
    /// opaque profile record happens to carry.
    #[must_use]
    pub fn display_name(&self) -> String {
        for key in ["name", "username", "email"] {
            if let Some(value) = self.profile.get(key).and_then(|v| v.as_str()) {
                if !value.is_empty() {
                    return value.to_owned();
                }
            }
        }
        "Admin".to_owned()
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A corrupt or missing store record reads as no session at all.
        let Some(session) = app_state.sessions.session() else {
            return Err(Redirect::to(LOGIN_PATH));
        };
        if session.token.is_empty() || session.profile.is_null() {
            return Err(Redirect::to(LOGIN_PATH));
        }

        // The browser must present the token it was handed at login.
        let jar = CookieJar::from_headers(&parts.headers);
        let presented = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if presented != session.token {
            return Err(Redirect::to(LOGIN_PATH));
        }

        Ok(Self { token: session.token, profile: session.profile })
    }
}

// =============================================================================
// COOKIES
// =============================================================================

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `GET /login` — login form, or straight to the dashboard when a session
/// already exists.
pub async fn login_page(State(state): State<AppState>) -> Response {
    if state.sessions.is_authenticated() {
        return Redirect::to("/dashboard").into_response();
    }
    templates::render(&LoginTemplate { error: None, email: String::new() })
}

/// `POST /login` — authenticate against the remote API; on success store the
/// session, hand the token to the browser, and redirect to the dashboard.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let email = form.email.trim().to_owned();
    if email.is_empty() || form.password.is_empty() {
        return templates::render(&LoginTemplate {
            error: Some("Please enter email and password".to_owned()),
            email,
        });
    }

    match state.api.login(&email, &form.password).await {
        Ok(login) => {
            if let Err(e) = state.sessions.set_session(login.token.clone(), login.admin) {
                tracing::error!(error = %e, "failed to persist session");
                return templates::render(&LoginTemplate {
                    error: Some("Could not store the session, please try again".to_owned()),
                    email,
                });
            }
            let jar = CookieJar::new().add(session_cookie(login.token, state.cookie_secure));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        // Bad credentials: show the server's message, session untouched.
        Err(e @ ApiError::Rejected { .. }) => {
            templates::render(&LoginTemplate { error: Some(e.to_string()), email })
        }
        Err(ApiError::Network(e)) => {
            tracing::warn!(error = %e, "login request failed");
            templates::render(&LoginTemplate { error: Some("Network error occurred".to_owned()), email })
        }
    }
}

/// `POST /logout` — clear the stored session and cookie, back to login.
pub async fn logout(State(state): State<AppState>) -> Response {
    if let Err(e) = state.sessions.clear_session() {
        tracing::error!(error = %e, "failed to clear session");
    }
    let jar = CookieJar::new().add(expired_cookie(state.cookie_secure));
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}

/// Shared 401 handling: the API no longer accepts the stored token, so the
/// session is over regardless of what the store says.
pub fn expire_session(state: &AppState) -> Response {
    if let Err(e) = state.sessions.clear_session() {
        tracing::error!(error = %e, "failed to clear rejected session");
    }
    let jar = CookieJar::new().add(expired_cookie(state.cookie_secure));
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
