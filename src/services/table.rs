//! Generic table widget: search, sort, and paginate an in-memory row set.
//!
//! The remote API returns whole collections; each table view shapes them
//! per-request from query-string parameters. No state is kept between
//! requests.

use std::cmp::Ordering;

use serde::Deserialize;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Query-string parameters accepted by every table view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<SortDir>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Sortable cell value. Numeric keys order numerically, text keys should be
/// lowercased by the row (see [`SortKey::text`]).
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(i64),
    Text(String),
}

impl SortKey {
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Implemented by row types that can appear in a table view.
pub trait TableRow {
    /// Substring match against an already-lowercased search needle.
    fn matches(&self, needle: &str) -> bool;

    /// Sort key for a named column; `None` for unknown columns, which leaves
    /// the incoming order untouched.
    fn sort_key(&self, column: &str) -> Option<SortKey>;
}

/// One page of shaped rows plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

/// Filter, sort, and paginate `rows` according to `query`.
///
/// Page numbers are clamped into range rather than rejected, and `per_page`
/// is capped, so arbitrary query strings cannot produce an empty or
/// oversized response.
#[must_use]
pub fn apply<T: TableRow + Clone>(rows: &[T], query: &TableQuery) -> Page<T> {
    let mut shaped: Vec<T> = match query.q.as_deref().map(str::trim) {
        Some(needle) if !needle.is_empty() => {
            let needle = needle.to_lowercase();
            rows.iter().filter(|r| r.matches(&needle)).cloned().collect()
        }
        _ => rows.to_vec(),
    };

    if let Some(column) = query.sort.as_deref() {
        let descending = query.dir == Some(SortDir::Desc);
        // Stable sort; rows without a key for the column sink to the end
        // in either direction.
        shaped.sort_by(|a, b| match (a.sort_key(column), b.sort_key(column)) {
            (Some(x), Some(y)) => {
                let ord = x.compare(&y);
                if descending { ord.reverse() } else { ord }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let total_rows = shaped.len();
    let total_pages = total_rows.div_ceil(per_page).max(1);
    let page = query.page.unwrap_or(1).clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let rows = shaped.into_iter().skip(start).take(per_page).collect();

    Page { rows, page, per_page, total_rows, total_pages }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
