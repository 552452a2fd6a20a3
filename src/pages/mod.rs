//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it lays out static copy and delegates every
//! interactive region to `components`.

pub mod landing;
