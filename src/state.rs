//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the session manager — the only mutable state in the process — and
//! the remote API client. Clone is required by Axum; both fields are cheap
//! handles.

use crate::services::api::AdminApi;
use crate::services::session::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub api: AdminApi,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(sessions: SessionManager, api: AdminApi, cookie_secure: bool) -> Self {
        Self { sessions, api, cookie_secure }
    }
}
