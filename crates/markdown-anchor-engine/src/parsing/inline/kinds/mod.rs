//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`LinkAnchor`**: `TRIP = '<'`, `OPEN = b"<a"`, `CLOSE = b"</a>"`,
//!   `SELF_CLOSE = b"/>"`; recognizes named anchors and yields an `AnchorSpan`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The engine only knows trip characters and recognizer ids.

pub mod link_anchor;

pub use link_anchor::{AnchorSpan, LinkAnchor};
