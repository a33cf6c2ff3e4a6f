use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_EB_CI_77__";
    unsafe { std::env::set_var(key, "  TRUE  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_31__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_9__"), None);
}

// =============================================================================
// normalize_api_url
// =============================================================================

#[test]
fn normalize_strips_trailing_slash() {
    assert_eq!(normalize_api_url("https://api.example.com/"), "https://api.example.com");
}

#[test]
fn normalize_strips_whitespace_and_repeated_slashes() {
    assert_eq!(normalize_api_url("  http://localhost:4000// "), "http://localhost:4000");
}

#[test]
fn normalize_keeps_path_segments() {
    assert_eq!(normalize_api_url("http://localhost:4000/v1"), "http://localhost:4000/v1");
}

#[test]
fn normalize_empty_stays_empty() {
    assert_eq!(normalize_api_url("   "), "");
}
