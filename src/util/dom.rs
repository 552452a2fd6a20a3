//! Document root (`<html>`) attribute and class access.
//!
//! The theme attribute, the banner-dismissed marker and the page language all
//! live on the root element, which keeps them visible to CSS selectors before
//! any component re-renders.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Mutable view of the document root element.
pub trait DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, class: &str, present: bool);
}

/// `document.documentElement` of the current window.
///
/// Looked up per call like [`crate::util::store::LocalStorage`]. Without the
/// `csr` feature reads come back empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRoot;

#[cfg(feature = "csr")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl DocumentRoot for BrowserRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            document_element()?.get_attribute(name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            None
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = document_element() {
                if let Err(e) = el.set_attribute(name, value) {
                    log::warn!("set_attribute failed: name={name} error={e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, value);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            document_element().is_some_and(|el| el.class_list().contains(class))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = class;
            false
        }
    }

    fn set_class(&self, class: &str, present: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = document_element() {
                let class_list = el.class_list();
                let result = if present { class_list.add_1(class) } else { class_list.remove_1(class) };
                if let Err(e) = result {
                    log::warn!("class update failed: class={class} error={e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (class, present);
        }
    }
}

/// In-memory root element for native tests.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}
