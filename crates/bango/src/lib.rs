//! # Bango
//!
//! Facade over [`bango_core`]. See that crate for details.
//!
//! ```rust
//! assert_eq!(bango::trim("[ThZu.Cc]080520-001-carib-720p"), "080520-001");
//! assert!(bango::is_uncensored("080520-001"));
//! ```
pub use bango_core::*;
