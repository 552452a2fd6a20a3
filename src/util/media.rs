//! System color-scheme preference.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Media query matched when the operating system prefers a dark color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the system currently prefers a dark color scheme.
///
/// Evaluated on demand; there is no subscription to later changes. Returns
/// `false` outside a browser or when `matchMedia` is unavailable.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
