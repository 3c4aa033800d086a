//! # markdown-anchor-engine
//!
//! Recognizes HTML-style named anchors (`<a name="top"></a>`,
//! `<a name="top"/>`) inside markdown inline text and reports them as link
//! targets instead of raw HTML.
//!
//! ```
//! use markdown_anchor_engine::{InlineEngine, InlineNode, Span};
//!
//! let text = r#"Jump <a name="top"></a> here"#;
//! let nodes = InlineEngine::default().parse(text, Span::new(0, text.len()));
//!
//! match &nodes[1] {
//!     InlineNode::LinkAnchor { anchor, .. } => assert_eq!(anchor.link(), Some("top")),
//!     other => panic!("expected an anchor, got {other:?}"),
//! }
//! ```

pub mod parsing;

// Re-export key types for easier usage
pub use markdown_anchor_config::{Config, RecognizerConfig};
pub use parsing::inline::{
    AnchorSpan, InlineEngine, InlineNode, LinkAnchor, ParseOutcome, RecognizerId, TripTable,
    anchors, parse_inline,
};
pub use parsing::parse_inline_for_span;
pub use parsing::rope::Span;
