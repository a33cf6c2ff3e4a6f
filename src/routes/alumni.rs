//! Alumni roster page — searchable, sortable, paginated table.
//!
//! The roster comes back from the API as one collection; shaping happens
//! in-process via the generic table module, driven by the query string.

use std::fmt::Write;

use axum::extract::{Query, State};
use axum::response::Response;

use super::auth::{self, AdminSession};
use crate::services::api::AlumniRecord;
use crate::services::table::{self, SortDir, SortKey, TableQuery, TableRow};
use crate::state::AppState;
use crate::templates::{self, AlumniTemplate, ColumnLink, ErrorTemplate};

const COLUMNS: [(&str, &str); 5] = [
    ("id", "ID"),
    ("name", "Name"),
    ("email", "Email"),
    ("role", "Role"),
    ("status", "Status"),
];

impl TableRow for AlumniRecord {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
            || self.status.to_lowercase().contains(needle)
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "id" => Some(SortKey::Number(self.id)),
            "name" => Some(SortKey::text(&self.name)),
            "email" => Some(SortKey::text(&self.email)),
            "role" => Some(SortKey::text(&self.role)),
            "status" => Some(SortKey::text(&self.status)),
            _ => None,
        }
    }
}

/// `GET /alumni` — fetch the roster and shape it per the query string.
pub async fn alumni_page(
    State(state): State<AppState>,
    session: AdminSession,
    Query(query): Query<TableQuery>,
) -> Response {
    let records = match state.api.list_alumni(&session.token).await {
        Ok(records) => records,
        Err(e) if e.is_unauthorized() => return auth::expire_session(&state),
        Err(e) => {
            tracing::error!(error = %e, "alumni fetch failed");
            return templates::render_error(&ErrorTemplate::from_api(&e));
        }
    };

    let page = table::apply(&records, &query);
    let columns = column_links(&query);
    let prev_href = (page.page > 1).then(|| page_href(&query, page.page - 1));
    let next_href = (page.page < page.total_pages).then(|| page_href(&query, page.page + 1));

    templates::render(&AlumniTemplate {
        admin_name: session.display_name(),
        q: query.q.clone().unwrap_or_default(),
        columns,
        page,
        prev_href,
        next_href,
    })
}

// =============================================================================
// LINK BUILDING
// =============================================================================

fn column_links(query: &TableQuery) -> Vec<ColumnLink> {
    COLUMNS
        .iter()
        .map(|&(key, label)| {
            let active = query.sort.as_deref() == Some(key);
            let current = query.dir.unwrap_or(SortDir::Asc);
            // Clicking the active column flips its direction; clicking a new
            // column starts ascending. Either way paging resets.
            let next_dir = if active { current.flipped() } else { SortDir::Asc };
            let marker = match (active, current) {
                (false, _) => "",
                (true, SortDir::Asc) => " \u{25b2}",
                (true, SortDir::Desc) => " \u{25bc}",
            };
            ColumnLink { label, href: table_href(query, Some(key), Some(next_dir), 1), marker }
        })
        .collect()
}

fn page_href(query: &TableQuery, page: usize) -> String {
    table_href(query, query.sort.as_deref(), query.dir, page)
}

fn table_href(query: &TableQuery, sort: Option<&str>, dir: Option<SortDir>, page: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(q) = query.q.as_deref().map(str::trim) {
        if !q.is_empty() {
            parts.push(format!("q={}", encode_query_value(q)));
        }
    }
    if let Some(sort) = sort {
        parts.push(format!("sort={sort}"));
        parts.push(format!("dir={}", dir.unwrap_or(SortDir::Asc).as_str()));
    }
    if page > 1 {
        parts.push(format!("page={page}"));
    }
    if let Some(per_page) = query.per_page {
        parts.push(format!("per_page={per_page}"));
    }

    if parts.is_empty() {
        "/alumni".to_owned()
    } else {
        format!("/alumni?{}", parts.join("&"))
    }
}

fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "alumni_test.rs"]
mod tests;
