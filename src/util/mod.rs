//! Browser seams shared by the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wraps one browser API behind a small trait or function so the
//! controllers in `state` run unchanged against in-memory fakes in native tests.
//! Browser-backed implementations only touch `web-sys` under the `csr` feature.

pub mod dom;
pub mod media;
pub mod store;
