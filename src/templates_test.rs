use super::*;

use askama::Template;

use crate::services::table::Page;

#[test]
fn login_template_shows_error_and_echoes_email() {
    let html = LoginTemplate {
        error: Some("Invalid credentials".into()),
        email: "ada@example.com".into(),
    }
    .render()
    .unwrap();
    assert!(html.contains("Admin Login"));
    assert!(html.contains("Invalid credentials"));
    assert!(html.contains(r#"value="ada@example.com""#));
}

#[test]
fn login_template_without_error_has_no_alert() {
    let html = LoginTemplate { error: None, email: String::new() }.render().unwrap();
    assert!(!html.contains(r#"<div class="alert-danger">"#));
}

#[test]
fn dashboard_template_renders_stats() {
    let html = DashboardTemplate {
        admin_name: "Ada".into(),
        stats: AdminStats { total_users: 120, new_users: 6, percentage_growth: 5.2 },
    }
    .render()
    .unwrap();
    assert!(html.contains("120"));
    assert!(html.contains("5.2% growth"));
    assert!(html.contains("Ada"));
}

#[test]
fn alumni_template_renders_rows_and_pager() {
    let rows = vec![AlumniRecord {
        id: 1,
        name: "Ada".into(),
        email: "ada@example.com".into(),
        role: "Admin".into(),
        status: "Active".into(),
    }];
    let html = AlumniTemplate {
        admin_name: "Ada".into(),
        q: String::new(),
        columns: vec![ColumnLink { label: "Name", href: "/alumni?sort=name&dir=asc".into(), marker: "" }],
        page: Page { rows, page: 1, per_page: 10, total_rows: 1, total_pages: 1 },
        prev_href: None,
        next_href: Some("/alumni?page=2".into()),
    }
    .render()
    .unwrap();
    assert!(html.contains("ada@example.com"));
    assert!(html.contains(r#"<span class="badge badge-success">"#));
    assert!(html.contains("Next"));
    assert!(!html.contains("Previous"));
}

#[test]
fn broadcast_template_renders_success_banner() {
    let html = BroadcastTemplate {
        admin_name: "Ada".into(),
        error: None,
        success: Some("Broadcast queued".into()),
        subject: String::new(),
        message: String::new(),
        group_alumni: false,
        group_custom: true,
        custom_emails: "a@x.com".into(),
    }
    .render()
    .unwrap();
    assert!(html.contains(r#"<div class="alert-success">"#));
    assert!(html.contains("Broadcast queued"));
    assert!(html.contains("checked"));
}

#[test]
fn error_template_from_network_error() {
    let tpl = ErrorTemplate::from_api(&ApiError::Network("connection refused".into()));
    assert_eq!(tpl.code, 502);
    assert_eq!(tpl.message, "Network error occurred");
}

#[test]
fn error_template_from_rejection_keeps_status_and_message() {
    let tpl = ErrorTemplate::from_api(&ApiError::Rejected {
        status: 403,
        message: "Forbidden".into(),
    });
    assert_eq!(tpl.code, 403);
    let html = tpl.render().unwrap();
    assert!(html.contains("403"));
    assert!(html.contains("Forbidden"));
}

#[test]
fn template_output_escapes_html() {
    let html = LoginTemplate {
        error: Some("<script>alert(1)</script>".into()),
        email: String::new(),
    }
    .render()
    .unwrap();
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}
