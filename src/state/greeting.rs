//! Display-name greeting with validation, persistence and reset.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use crate::config::StorageKeys;
use crate::i18n::Catalog;
use crate::util::store::KeyValueStore;

/// Longest accepted name, in characters after trimming.
pub const MAX_NAME_CHARS: usize = 20;

/// Reasons a name is rejected on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name cannot exceed {max} characters")]
    TooLong { max: usize },
}

/// Strip leading and trailing whitespace, including the zero-width U+FEFF
/// byte-order mark that browsers also treat as blank.
pub fn trim_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Trim `raw` with [`trim_name`] and check it is 1..=[`MAX_NAME_CHARS`]
/// characters long.
///
/// Length counts Unicode scalar values, so a name of 20 accented letters is
/// accepted.
///
/// # Errors
///
/// [`NameError::Empty`] when nothing but whitespace remains,
/// [`NameError::TooLong`] when more than [`MAX_NAME_CHARS`] characters remain.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let trimmed = trim_name(raw);
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(NameError::TooLong { max: MAX_NAME_CHARS });
    }
    Ok(trimmed.to_owned())
}

/// Greeting form state.
///
/// `name` is the last saved name (`None` shows the default greeting), `input`
/// mirrors the text field, and `error` is the message currently shown under
/// it (`None` clears the message).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreetingState {
    pub name: Option<String>,
    pub input: String,
    pub error: Option<NameError>,
}

impl GreetingState {
    /// Restore the saved name. An empty or whitespace-only stored value counts
    /// as no name.
    pub fn load(store: &impl KeyValueStore, keys: &StorageKeys) -> Self {
        let name = store.get(&keys.username).filter(|n| !trim_name(n).is_empty());
        Self { input: name.clone().unwrap_or_default(), name, error: None }
    }

    /// Greeting text. The saved name is inserted as-is; the view renders it
    /// as a text node, never as markup.
    pub fn greeting(&self, catalog: &Catalog) -> String {
        match &self.name {
            Some(name) => catalog.welcome(name),
            None => catalog.default_greeting.to_owned(),
        }
    }

    /// Error message text, empty when there is no error.
    pub fn error_text(&self, catalog: &Catalog) -> String {
        self.error.map(|e| catalog.name_error(e)).unwrap_or_default()
    }

    /// Validate the current input and persist it.
    ///
    /// On rejection only `error` changes: the store, the greeting and the
    /// input are left as they were.
    ///
    /// # Errors
    ///
    /// Returns the [`NameError`] that is also recorded in `self.error`.
    pub fn save(&mut self, store: &impl KeyValueStore, keys: &StorageKeys) -> Result<(), NameError> {
        match validate_name(&self.input) {
            Ok(name) => {
                store.set(&keys.username, &name);
                self.name = Some(name);
                self.error = None;
                log::debug!("display name saved");
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                log::debug!("display name rejected: {e}");
                Err(e)
            }
        }
    }

    /// Forget the saved name and clear the form.
    pub fn reset(&mut self, store: &impl KeyValueStore, keys: &StorageKeys) {
        store.remove(&keys.username);
        *self = Self::default();
        log::debug!("display name reset");
    }
}
