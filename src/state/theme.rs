//! Light/dark theme initialization and toggle.
//!
//! The applied theme lives only in the root `data-theme` attribute. Every
//! operation re-reads it from there instead of caching a flag, so the toggle
//! stays correct even if something else rewrites the attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::StorageKeys;
use crate::util::dom::DocumentRoot;
use crate::util::store::KeyValueStore;

/// Root attribute carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or applied value. Only the exact strings `"dark"` and
    /// `"light"` are recognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme currently applied to `root`. A missing or unrecognized attribute
/// reads as light.
pub fn current(root: &impl DocumentRoot) -> Theme {
    root.attribute(THEME_ATTRIBUTE)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Write `theme` to the root attribute.
pub fn apply(root: &impl DocumentRoot, theme: Theme) {
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
}

/// Apply the persisted theme, or the system preference when none is stored.
///
/// `prefers_dark` is only called when the store has no usable value.
/// Initialization never writes to the store.
pub fn init<F>(store: &impl KeyValueStore, root: &impl DocumentRoot, keys: &StorageKeys, prefers_dark: F) -> Theme
where
    F: FnOnce() -> bool,
{
    let stored = store.get(&keys.theme);
    let theme = match stored.as_deref().map(|raw| (raw, Theme::parse(raw))) {
        Some((_, Some(theme))) => theme,
        Some((raw, None)) => {
            log::warn!("ignoring unrecognized stored theme: {raw}");
            from_system(prefers_dark())
        }
        None => from_system(prefers_dark()),
    };
    apply(root, theme);
    log::debug!("theme initialized: {}", theme.as_str());
    theme
}

/// Flip the applied theme and persist the result.
pub fn toggle(store: &impl KeyValueStore, root: &impl DocumentRoot, keys: &StorageKeys) -> Theme {
    let next = current(root).inverse();
    apply(root, next);
    store.set(&keys.theme, next.as_str());
    log::debug!("theme toggled: {}", next.as_str());
    next
}

fn from_system(prefers_dark: bool) -> Theme {
    if prefers_dark { Theme::Dark } else { Theme::Light }
}
