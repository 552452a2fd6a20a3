//! Page configuration captured at build time.
//!
//! A static WASM page has no process environment, so the variables below are
//! read with `option_env!` when the crate is compiled:
//!
//! - `CODE_MERLIN_LOCALE`: `en` (default) or `hr`
//! - `CODE_MERLIN_STORAGE_PREFIX`: namespace prepended to every storage key
//!   (default: none)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::i18n::Locale;

pub const LOCALE_VAR: &str = "CODE_MERLIN_LOCALE";
pub const STORAGE_PREFIX_VAR: &str = "CODE_MERLIN_STORAGE_PREFIX";

pub const THEME_KEY: &str = "theme";
pub const USERNAME_KEY: &str = "username";
pub const BANNER_DISMISSED_KEY: &str = "bannerDismissed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown CODE_MERLIN_LOCALE: {0}")]
    UnknownLocale(String),

    #[error("invalid CODE_MERLIN_STORAGE_PREFIX '{0}' (allowed: ASCII letters, digits, '-', '_', '.', ':')")]
    InvalidPrefix(String),
}

/// Storage key names, one per controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub theme: String,
    pub username: String,
    pub banner_dismissed: String,
}

impl StorageKeys {
    /// Keys with `prefix` prepended verbatim. An empty prefix yields the bare
    /// key names.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            theme: format!("{prefix}{THEME_KEY}"),
            username: format!("{prefix}{USERNAME_KEY}"),
            banner_dismissed: format!("{prefix}{BANNER_DISMISSED_KEY}"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub locale: Locale,
    pub keys: StorageKeys,
}

impl PageConfig {
    /// Parse configuration through `lookup`, which maps a variable name to
    /// its value. Unset or blank variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unsupported locale or a prefix with
    /// characters outside the allowed set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = parse_locale(non_blank(lookup(LOCALE_VAR)).as_deref())?;
        let raw_prefix = non_blank(lookup(STORAGE_PREFIX_VAR));
        let prefix = parse_prefix(raw_prefix.as_deref())?;
        Ok(Self { locale, keys: StorageKeys::with_prefix(prefix) })
    }

    /// Configuration baked in by the build environment, or defaults with a
    /// warning if it does not parse.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            log::warn!("page config rejected, using defaults: {e}");
            Self::default()
        })
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        LOCALE_VAR => option_env!("CODE_MERLIN_LOCALE"),
        STORAGE_PREFIX_VAR => option_env!("CODE_MERLIN_STORAGE_PREFIX"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_locale(raw: Option<&str>) -> Result<Locale, ConfigError> {
    match raw {
        None => Ok(Locale::default()),
        Some(tag) => Locale::parse(tag).ok_or_else(|| ConfigError::UnknownLocale(tag.to_owned())),
    }
}

fn parse_prefix(raw: Option<&str>) -> Result<&str, ConfigError> {
    let Some(prefix) = raw else {
        return Ok("");
    };
    let valid = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if valid { Ok(prefix) } else { Err(ConfigError::InvalidPrefix(prefix.to_owned())) }
}
