use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: i64,
    name: &'static str,
}

impl TableRow for Row {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "id" => Some(SortKey::Number(self.id)),
            "name" => Some(SortKey::text(self.name)),
            _ => None,
        }
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 3, name: "Charlie" },
        Row { id: 1, name: "alice" },
        Row { id: 2, name: "Bob" },
    ]
}

fn query() -> TableQuery {
    TableQuery::default()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn no_query_returns_everything_in_order() {
    let page = apply(&rows(), &query());
    assert_eq!(page.total_rows, 3);
    assert_eq!(page.rows[0].name, "Charlie");
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn search_is_case_insensitive() {
    let q = TableQuery { q: Some("ALICE".into()), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(page.total_rows, 1);
    assert_eq!(page.rows[0].name, "alice");
}

#[test]
fn blank_search_matches_everything() {
    let q = TableQuery { q: Some("   ".into()), ..query() };
    assert_eq!(apply(&rows(), &q).total_rows, 3);
}

#[test]
fn search_with_no_hits_yields_empty_single_page() {
    let q = TableQuery { q: Some("zebra".into()), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(page.total_rows, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.rows.is_empty());
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn sort_numeric_ascending() {
    let q = TableQuery { sort: Some("id".into()), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn sort_numeric_descending() {
    let q = TableQuery { sort: Some("id".into()), dir: Some(SortDir::Desc), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn sort_text_is_case_insensitive() {
    let q = TableQuery { sort: Some("name".into()), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(
        page.rows.iter().map(|r| r.name).collect::<Vec<_>>(),
        vec!["alice", "Bob", "Charlie"]
    );
}

#[test]
fn unknown_sort_column_preserves_order() {
    let q = TableQuery { sort: Some("nope".into()), ..query() };
    let page = apply(&rows(), &q);
    assert_eq!(page.rows, rows());
}

#[test]
fn descending_sort_keeps_incoming_order_for_equal_keys() {
    let records = vec![
        Row { id: 1, name: "same" },
        Row { id: 2, name: "same" },
        Row { id: 3, name: "same" },
    ];
    let q = TableQuery { sort: Some("name".into()), dir: Some(SortDir::Desc), ..query() };
    let page = apply(&records, &q);
    assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[derive(Debug, Clone)]
struct SparseRow {
    id: i64,
    nick: Option<&'static str>,
}

impl TableRow for SparseRow {
    fn matches(&self, _needle: &str) -> bool {
        true
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "nick" => self.nick.map(SortKey::text),
            _ => None,
        }
    }
}

#[test]
fn rows_without_a_key_sink_to_the_end_in_both_directions() {
    let records = vec![
        SparseRow { id: 1, nick: None },
        SparseRow { id: 2, nick: Some("alpha") },
        SparseRow { id: 3, nick: Some("zulu") },
    ];

    let asc = TableQuery { sort: Some("nick".into()), ..query() };
    let page = apply(&records, &asc);
    assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);

    let desc = TableQuery { dir: Some(SortDir::Desc), ..asc };
    let page = apply(&records, &desc);
    assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
}

// =============================================================================
// Pagination
// =============================================================================

fn many_rows(n: i64) -> Vec<Row> {
    (1..=n).map(|id| Row { id, name: "row" }).collect()
}

#[test]
fn default_page_size_is_ten() {
    let page = apply(&many_rows(25), &query());
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn second_page_picks_up_where_first_left_off() {
    let q = TableQuery { page: Some(2), sort: Some("id".into()), ..query() };
    let page = apply(&many_rows(25), &q);
    assert_eq!(page.rows[0].id, 11);
    assert_eq!(page.page, 2);
}

#[test]
fn page_beyond_range_clamps_to_last() {
    let q = TableQuery { page: Some(99), ..query() };
    let page = apply(&many_rows(25), &q);
    assert_eq!(page.page, 3);
    assert_eq!(page.rows.len(), 5);
}

#[test]
fn page_zero_clamps_to_first() {
    let q = TableQuery { page: Some(0), ..query() };
    let page = apply(&many_rows(25), &q);
    assert_eq!(page.page, 1);
}

#[test]
fn per_page_is_capped() {
    let q = TableQuery { per_page: Some(100_000), ..query() };
    let page = apply(&many_rows(250), &q);
    assert_eq!(page.per_page, MAX_PER_PAGE);
    assert_eq!(page.rows.len(), MAX_PER_PAGE);
}

#[test]
fn per_page_zero_clamps_to_one() {
    let q = TableQuery { per_page: Some(0), ..query() };
    let page = apply(&many_rows(5), &q);
    assert_eq!(page.per_page, 1);
    assert_eq!(page.total_pages, 5);
}

#[test]
fn empty_input_yields_one_empty_page() {
    let page = apply(&Vec::<Row>::new(), &query());
    assert_eq!(page.total_rows, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
}

// =============================================================================
// SortDir
// =============================================================================

#[test]
fn sort_dir_flips() {
    assert_eq!(SortDir::Asc.flipped(), SortDir::Desc);
    assert_eq!(SortDir::Desc.flipped(), SortDir::Asc);
}

#[test]
fn sort_dir_parses_from_query_string() {
    let q: TableQuery = serde_urlencoded_like("dir=desc");
    assert_eq!(q.dir, Some(SortDir::Desc));
}

// Query-string deserialization goes through serde; exercise it via JSON with
// the same field shapes.
fn serde_urlencoded_like(pair: &str) -> TableQuery {
    let (key, value) = pair.split_once('=').unwrap();
    serde_json::from_value(serde_json::json!({ key: value })).unwrap()
}
