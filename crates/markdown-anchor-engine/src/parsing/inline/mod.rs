//! # Inline Parsing
//!
//! Trip-character dispatch over a text range, with named anchors
//! (`<a name="...">`) as the recognized construct.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing: callers hand the engine
//! the text of one inline-eligible block and the range it may scan.
//!
//! The engine walks the range with a cursor. At a character registered in
//! its trip table it asks the mapped recognizer whether a construct starts
//! there; a recognizer answers with a [`ParseOutcome`] and never fails in
//! any other way. Unrecognized runs become `Text` nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, LinkAnchor) and `ParseOutcome`
//! - **`trip`**: `TripTableBuilder` / frozen `TripTable` of trip characters
//! - **`kinds`**: Inline-specific types with owned delimiters (LinkAnchor)
//! - **`markup`**: Best-effort attribute reading for embedded HTML fragments
//! - **`cursor`**: `Cursor` for scanning with position tracking
//! - **`parser`**: `InlineEngine` and the `parse_inline()` entry point
//!
//! ## Overlapping Anchors
//!
//! An anchor is rejected when another `<a` opens before its `</a>` (or
//! `/>`). Scanning then moves on, so a later anchor in the same text can
//! still be recognized.

pub mod cursor;
pub mod kinds;
pub mod markup;
pub mod parser;
pub mod trip;
pub mod types;

pub use kinds::{AnchorSpan, LinkAnchor};
pub use parser::{InlineEngine, anchors, parse_inline};
pub use trip::{RecognizerId, TripTable, TripTableBuilder};
pub use types::{InlineNode, ParseOutcome};
