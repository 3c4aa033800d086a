use markdown_anchor_config::RecognizerConfig;
use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

use super::{
    cursor::Cursor,
    kinds::{AnchorSpan, LinkAnchor},
    trip::{RecognizerId, TripTable, TripTableBuilder},
    types::{InlineNode, ParseOutcome},
};

/// Routes trip characters to recognizers and stitches the results into a
/// lossless sequence of [`InlineNode`]s.
///
/// The trip table is built once in [`InlineEngine::new`] and never changes,
/// so an engine can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct InlineEngine {
    trips: TripTable,
}

impl Default for InlineEngine {
    fn default() -> Self {
        Self::new(&RecognizerConfig::default())
    }
}

impl InlineEngine {
    pub fn new(config: &RecognizerConfig) -> Self {
        let mut trips = TripTableBuilder::new();
        if config.link_anchors {
            LinkAnchor::add_trip_chars(&mut trips);
        }
        let trips = trips.build();
        log::debug!(
            "inline engine ready with trip chars {:?}",
            trips.trip_chars().collect::<Vec<_>>()
        );
        Self { trips }
    }

    pub fn trip_table(&self) -> &TripTable {
        &self.trips
    }

    /// Parses `range` of `text` into inline nodes with spans relative to `text`.
    ///
    /// `range` is clamped to `text` and should lie on char boundaries.
    /// Recognizers may look at `text` up to `range.end` and no further.
    pub fn parse(&self, text: &str, range: Span) -> Vec<InlineNode> {
        self.scan(text, range, 0)
    }

    /// Parses one span of a rope, producing absolute spans into the rope.
    pub fn parse_rope(&self, rope: &Rope, sp: Span) -> Vec<InlineNode> {
        let s = slice_to_string(rope, sp);
        self.scan(&s, Span::new(0, s.len()), sp.start)
    }

    fn scan(&self, text: &str, range: Span, base: usize) -> Vec<InlineNode> {
        let end = range.end.min(text.len());
        let mut cur = Cursor::new(text, base);
        cur.bump_n(range.start.min(end));
        let mut out = vec![];
        let mut text_start = cur.pos();

        // Helper to flush accumulated text as a Text node
        fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
            if end > start {
                out.push(InlineNode::Text(Span { start, end }));
            }
        }

        while cur.i < end {
            if let Some(node) = self.try_trip(text, cur.i, end) {
                let full = node.span();
                flush_text(&mut out, text_start, cur.pos());
                cur.bump_n(full.len());
                text_start = cur.pos();
                out.push(node.offset(base));
                continue;
            }
            if cur.bump_char().is_none() {
                cur.bump();
            }
        }

        flush_text(&mut out, text_start, base + end);
        out
    }

    /// Tries each recognizer registered for the character at `start`.
    fn try_trip(&self, text: &str, start: usize, max_end: usize) -> Option<InlineNode> {
        let c = text.get(start..)?.chars().next()?;
        self.trips
            .recognizers_for(c)
            .iter()
            .find_map(|&id| recognize(id, text, start, max_end).into_matched())
            .map(|(node, _)| node)
    }
}

fn recognize(
    id: RecognizerId,
    text: &str,
    start: usize,
    max_end: usize,
) -> ParseOutcome<InlineNode> {
    match id {
        RecognizerId::LinkAnchor => LinkAnchor::parse(text, start, max_end)
            .map(|anchor, full| InlineNode::LinkAnchor { full, anchor }),
    }
}

/// Parses `s` with every recognizer enabled. `base` is the byte offset of
/// `s` in the rope and is added to every span.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    InlineEngine::default()
        .parse(s, Span::new(0, s.len()))
        .into_iter()
        .map(|n| n.offset(base))
        .collect()
}

/// The anchors in a parsed node list with their consumed spans, in source
/// order. Useful for building a link-target index.
pub fn anchors(nodes: &[InlineNode]) -> impl Iterator<Item = (Span, &AnchorSpan)> {
    nodes.iter().filter_map(|n| match n {
        InlineNode::LinkAnchor { full, anchor } => Some((*full, anchor)),
        InlineNode::Text(_) => None,
    })
}
