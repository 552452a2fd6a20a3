use std::cell::Cell;

use super::*;
use crate::util::dom::MemoryRoot;
use crate::util::store::MemoryStore;

fn keys() -> StorageKeys {
    StorageKeys::default()
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_exact_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_inverse_is_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.inverse(), theme);
        assert_eq!(theme.inverse().inverse(), theme);
    }
}

#[test]
fn current_reads_light_when_attribute_missing_or_unknown() {
    let root = MemoryRoot::new();
    assert_eq!(current(&root), Theme::Light);
    root.set_attribute(THEME_ATTRIBUTE, "sepia");
    assert_eq!(current(&root), Theme::Light);
}

// =============================================================
// init
// =============================================================

#[test]
fn init_applies_stored_dark_without_querying_system() {
    let store = MemoryStore::with_entries([("theme", "dark")]);
    let root = MemoryRoot::new();
    let queried = Cell::new(false);

    let theme = init(&store, &root, &keys(), || {
        queried.set(true);
        false
    });

    assert_eq!(theme, Theme::Dark);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert!(!queried.get());
}

#[test]
fn init_applies_stored_light_even_when_system_prefers_dark() {
    let store = MemoryStore::with_entries([("theme", "light")]);
    let root = MemoryRoot::new();
    assert_eq!(init(&store, &root, &keys(), || true), Theme::Light);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
}

#[test]
fn init_falls_back_to_system_preference() {
    let root = MemoryRoot::new();
    assert_eq!(init(&MemoryStore::new(), &root, &keys(), || true), Theme::Dark);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));

    let root = MemoryRoot::new();
    assert_eq!(init(&MemoryStore::new(), &root, &keys(), || false), Theme::Light);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
}

#[test]
fn init_treats_unrecognized_stored_value_as_absent() {
    let store = MemoryStore::with_entries([("theme", "solarized")]);
    let root = MemoryRoot::new();
    assert_eq!(init(&store, &root, &keys(), || true), Theme::Dark);
}

#[test]
fn init_does_not_write_store() {
    let store = MemoryStore::new();
    init(&store, &MemoryRoot::new(), &keys(), || true);
    assert!(store.is_empty());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_light_applies_and_persists_dark() {
    let store = MemoryStore::new();
    let root = MemoryRoot::new();
    init(&store, &root, &keys(), || false);

    assert_eq!(toggle(&store, &root, &keys()), Theme::Dark);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));

    assert_eq!(toggle(&store, &root, &keys()), Theme::Light);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_attribute_and_store() {
    for start in [Theme::Light, Theme::Dark] {
        let store = MemoryStore::with_entries([("theme", start.as_str())]);
        let root = MemoryRoot::new();
        init(&store, &root, &keys(), || false);

        toggle(&store, &root, &keys());
        toggle(&store, &root, &keys());

        assert_eq!(current(&root), start);
        assert_eq!(store.get("theme").as_deref(), Some(start.as_str()));
    }
}

#[test]
fn toggle_rederives_state_from_root_attribute() {
    let store = MemoryStore::new();
    let root = MemoryRoot::new();
    root.set_attribute(THEME_ATTRIBUTE, "dark");
    assert_eq!(toggle(&store, &root, &keys()), Theme::Light);
}

#[test]
fn toggle_persists_under_prefixed_key() {
    let keys = StorageKeys::with_prefix("cm.");
    let store = MemoryStore::new();
    toggle(&store, &MemoryRoot::new(), &keys);
    assert_eq!(store.get("cm.theme").as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), None);
}
