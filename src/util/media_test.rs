#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn prefers_dark_scheme_is_false_without_browser() {
    assert!(!prefers_dark_scheme());
}

#[test]
fn query_targets_dark_color_scheme() {
    assert_eq!(PREFERS_DARK_QUERY, "(prefers-color-scheme: dark)");
}
