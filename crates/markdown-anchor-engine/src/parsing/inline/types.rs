use crate::parsing::rope::span::Span;

use super::kinds::AnchorSpan;

/// A parsed inline node with byte spans into the source.
///
/// Node spans are contiguous and cover the parsed range, so slicing the
/// source with each span in order reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any recognized construct.
    Text(Span),
    /// A named anchor `<a name="...">...</a>` or `<a name="..."/>`.
    LinkAnchor {
        /// Consumed span, including one absorbed trailing space if present.
        full: Span,
        anchor: AnchorSpan,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::LinkAnchor { full, .. } => *full,
        }
    }

    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        match self {
            InlineNode::Text(sp) => InlineNode::Text(sp.offset(base)),
            InlineNode::LinkAnchor { full, anchor } => InlineNode::LinkAnchor {
                full: full.offset(base),
                anchor,
            },
        }
    }
}

/// What a recognizer reports back to the engine for one trip position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// Nothing recognized here; the engine advances and keeps scanning.
    NoMatch,
    /// A construct was recognized. `consumed.start` is always the position
    /// the recognizer was called with and `consumed.end > consumed.start`.
    Matched { span: T, consumed: Span },
}

impl<T> ParseOutcome<T> {
    pub fn is_match(&self) -> bool {
        matches!(self, ParseOutcome::Matched { .. })
    }

    /// Converts the payload, keeping the consumed range.
    pub fn map<U>(self, f: impl FnOnce(T, Span) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::NoMatch => ParseOutcome::NoMatch,
            ParseOutcome::Matched { span, consumed } => ParseOutcome::Matched {
                span: f(span, consumed),
                consumed,
            },
        }
    }

    pub fn into_matched(self) -> Option<(T, Span)> {
        match self {
            ParseOutcome::NoMatch => None,
            ParseOutcome::Matched { span, consumed } => Some((span, consumed)),
        }
    }
}
