//! UI string catalogs.
//!
//! Every user-visible string on the page comes from a [`Catalog`] selected by
//! [`Locale`]. Catalogs are `'static` so components can capture them in
//! reactive closures without cloning.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::state::greeting::NameError;
use crate::state::theme::Theme;
use crate::util::dom::DocumentRoot;

/// Root attribute carrying the page language.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Supported page languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Hr,
}

impl Locale {
    /// Parse a language tag (`en`, `hr`, case-insensitive, region ignored).
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "hr" => Some(Self::Hr),
            _ => None,
        }
    }

    /// BCP 47 tag written to the root `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hr => "hr",
        }
    }

    pub fn catalog(self) -> &'static Catalog {
        match self {
            Self::En => &EN,
            Self::Hr => &HR,
        }
    }
}

/// Announce `locale` on the root element for assistive technology and
/// hyphenation.
pub fn apply_lang(root: &impl DocumentRoot, locale: Locale) {
    root.set_attribute(LANG_ATTRIBUTE, locale.tag());
}

/// Static UI strings for one locale.
#[derive(Debug)]
pub struct Catalog {
    pub page_title: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub banner_text: &'static str,
    pub banner_close_label: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub save_button: &'static str,
    pub reset_button: &'static str,
    pub switch_to_dark: &'static str,
    pub switch_to_light: &'static str,
    pub default_greeting: &'static str,
    pub welcome_prefix: &'static str,
    pub welcome_suffix: &'static str,
    pub error_empty: &'static str,
    pub error_too_long_prefix: &'static str,
    pub error_too_long_suffix: &'static str,
}

pub static EN: Catalog = Catalog {
    page_title: "Code Merlin Aplikacija",
    heading: "Code Merlin",
    tagline: "Learn to code, one spell at a time.",
    banner_text: "New lessons are added every week. Check back soon!",
    banner_close_label: "Close banner",
    name_label: "Your name",
    name_placeholder: "Enter your name",
    save_button: "Save",
    reset_button: "Reset",
    switch_to_dark: "Switch to dark mode",
    switch_to_light: "Switch to light mode",
    default_greeting: "Welcome to Code Merlin!",
    welcome_prefix: "Welcome, ",
    welcome_suffix: "!",
    error_empty: "Name cannot be empty.",
    error_too_long_prefix: "Name cannot exceed ",
    error_too_long_suffix: " characters.",
};

pub static HR: Catalog = Catalog {
    page_title: "Code Merlin Aplikacija",
    heading: "Code Merlin",
    tagline: "Nauči programirati, čaroliju po čaroliju.",
    banner_text: "Nove lekcije dodajemo svaki tjedan. Navratite uskoro!",
    banner_close_label: "Zatvori obavijest",
    name_label: "Vaše ime",
    name_placeholder: "Unesite svoje ime",
    save_button: "Spremi",
    reset_button: "Poništi",
    switch_to_dark: "Prebaci na tamnu temu",
    switch_to_light: "Prebaci na svijetlu temu",
    default_greeting: "Dobrodošli u Code Merlin!",
    welcome_prefix: "Dobrodošli, ",
    welcome_suffix: "!",
    error_empty: "Ime ne smije biti prazno.",
    error_too_long_prefix: "Ime ne smije imati više od ",
    error_too_long_suffix: " znakova.",
};

impl Catalog {
    /// Greeting for a saved name. The name is inserted verbatim.
    pub fn welcome(&self, name: &str) -> String {
        format!("{}{name}{}", self.welcome_prefix, self.welcome_suffix)
    }

    /// Accessible label for the theme toggle: describes the action a click
    /// performs, i.e. switching away from `current`.
    pub fn theme_toggle_label(&self, current: Theme) -> &'static str {
        match current {
            Theme::Light => self.switch_to_dark,
            Theme::Dark => self.switch_to_light,
        }
    }

    pub fn name_error(&self, error: NameError) -> String {
        match error {
            NameError::Empty => self.error_empty.to_owned(),
            NameError::TooLong { max } => {
                format!("{}{max}{}", self.error_too_long_prefix, self.error_too_long_suffix)
            }
        }
    }
}
