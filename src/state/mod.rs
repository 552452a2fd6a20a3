//! Page controllers, one per interactive feature.
//!
//! DESIGN
//! ======
//! Each controller is a synchronous transition over the store and document
//! root seams from `util`. Controllers share no runtime state and use
//! disjoint storage keys, so they can be initialized in any order.

pub mod banner;
pub mod greeting;
pub mod theme;
