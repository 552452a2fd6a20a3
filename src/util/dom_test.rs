use super::*;

#[test]
fn memory_root_starts_without_attributes_or_classes() {
    let root = MemoryRoot::new();
    assert_eq!(root.attribute("data-theme"), None);
    assert!(!root.has_class("banner-dismissed"));
}

#[test]
fn memory_root_set_attribute_replaces_value() {
    let root = MemoryRoot::new();
    root.set_attribute("data-theme", "dark");
    root.set_attribute("data-theme", "light");
    assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
}

#[test]
fn memory_root_set_class_adds_and_removes() {
    let root = MemoryRoot::new();
    root.set_class("banner-dismissed", true);
    root.set_class("banner-dismissed", true);
    assert!(root.has_class("banner-dismissed"));
    root.set_class("banner-dismissed", false);
    assert!(!root.has_class("banner-dismissed"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_root_is_inert_without_browser() {
    let root = BrowserRoot;
    root.set_attribute("data-theme", "dark");
    root.set_class("banner-dismissed", true);
    assert_eq!(root.attribute("data-theme"), None);
    assert!(!root.has_class("banner-dismissed"));
}
