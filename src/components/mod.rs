//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Each component owns one controller's reactive signal, initializes it from
//! the browser on mount, and forwards clicks to the controller in `state`.

pub mod greeting_form;
pub mod info_banner;
pub mod theme_toggle;
