pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use inline::{InlineEngine, InlineNode};
use rope::span::Span;

/// Convenience: inline parse of one block's content span with every
/// recognizer enabled. Spans in the result are absolute rope offsets.
pub fn parse_inline_for_span(rope: &Rope, sp: Span) -> Vec<InlineNode> {
    InlineEngine::default().parse_rope(rope, sp)
}
