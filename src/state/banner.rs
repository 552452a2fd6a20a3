//! Dismissible informational banner.
//!
//! Dismissal is one-way: there is no control to bring the banner back, so it
//! stays hidden until the stored flag is cleared outside the page.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::config::StorageKeys;
use crate::util::dom::DocumentRoot;
use crate::util::store::KeyValueStore;

/// Root class marking the banner as dismissed.
pub const DISMISSED_CLASS: &str = "banner-dismissed";

/// Stored value meaning "dismissed". Anything else, or no value, means visible.
pub const DISMISSED_VALUE: &str = "true";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub dismissed: bool,
}

impl BannerState {
    /// Read the dismissal flag and mirror it onto the root class.
    pub fn load(store: &impl KeyValueStore, root: &impl DocumentRoot, keys: &StorageKeys) -> Self {
        let dismissed = store.get(&keys.banner_dismissed).as_deref() == Some(DISMISSED_VALUE);
        root.set_class(DISMISSED_CLASS, dismissed);
        Self { dismissed }
    }

    pub fn visible(self) -> bool {
        !self.dismissed
    }

    /// Hide the banner and remember that it was closed.
    pub fn dismiss(&mut self, store: &impl KeyValueStore, root: &impl DocumentRoot, keys: &StorageKeys) {
        self.dismissed = true;
        root.set_class(DISMISSED_CLASS, true);
        store.set(&keys.banner_dismissed, DISMISSED_VALUE);
        log::debug!("banner dismissed");
    }
}
