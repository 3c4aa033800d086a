//! Integration tests for the parsing module.
//!
//! Documents are split into lines the way a block parser would hand them
//! over, parsed, checked against the span invariants, then compared as
//! normalized lines.


use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{
    inline::{LinkAnchor, ParseOutcome},
    parse_inline_for_span,
    rope::span::Span,
};

const DOC: &str = "# Contents\n\nJump to <a name=\"intro\"></a> the intro.\nBroken <a name=top> anchor</a> kept.\nNested <a name=\"a\"><a name=\"b\"></a> pair.\n";

/// Byte spans of each non-empty line, newline excluded.
fn line_spans(text: &str) -> Vec<Span> {
    let mut spans = vec![];
    let mut offset = 0;
    for line in text.split('\n') {
        if !line.is_empty() {
            spans.push(Span::new(offset, offset + line.len()));
        }
        offset += line.len() + 1;
    }
    spans
}

fn parse_lines(text: &str) -> Vec<String> {
    let rope = Rope::from(text);
    line_spans(text)
        .into_iter()
        .flat_map(|sp| {
            let nodes = parse_inline_for_span(&rope, sp);
            invariants::check(text, sp, &nodes);
            normalize::normalize(&rope, &nodes)
        })
        .collect()
}

#[test]
fn document_lines() {
    assert_eq!(
        parse_lines(DOC),
        vec![
            r##"Text 0..10 "# Contents""##,
            r#"Text 12..20 "Jump to ""#,
            r#"LinkAnchor 20..41 intro "<a name=\"intro\"></a> ""#,
            r#"Text 41..51 "the intro.""#,
            r#"Text 52..59 "Broken ""#,
            r#"LinkAnchor 59..83 - "<a name=top> anchor</a> ""#,
            r#"Text 83..88 "kept.""#,
            r#"Text 89..108 "Nested <a name=\"a\">""#,
            r#"LinkAnchor 108..125 b "<a name=\"b\"></a> ""#,
            r#"Text 125..130 "pair.""#,
        ]
    );
}

/// A block boundary stops the search for `</a>`.
#[test]
fn anchor_does_not_close_across_blocks() {
    let text = "start <a name=\"x\">\nend</a>";
    let lines = parse_lines(text);
    assert_eq!(
        lines,
        vec![
            r#"Text 0..18 "start <a name=\"x\">""#,
            r#"Text 19..26 "end</a>""#,
        ]
    );
}

#[test]
fn empty_span_produces_no_nodes() {
    let rope = Rope::from("abc");
    assert!(parse_inline_for_span(&rope, Span::new(1, 1)).is_empty());
}

const SAMPLES: &[&str] = &[
    DOC,
    r#"<a name="x">content</a>"#,
    r#"<a name="x"/>"#,
    r#"<a name="x"><a name="y"></a>"#,
    "<a ",
    r#"<a notaname="x"></a>"#,
    r#"a < b and <a id='q' name='r'>s</a> <a name="t"/>"#,
    "ünïcödé <a name=\"ë\"/> trailing",
];

/// Every recognizer call either declines or consumes a span starting where
/// it was called, and the anchor renders back to its source.
#[test]
fn recognizer_contract_holds_at_every_offset() {
    for text in SAMPLES {
        for start in (0..=text.len()).filter(|&i| text.is_char_boundary(i)) {
            let outcome = LinkAnchor::parse(text, start, text.len());
            assert_eq!(outcome, LinkAnchor::parse(text, start, text.len()));

            match outcome {
                ParseOutcome::NoMatch => {}
                ParseOutcome::Matched { span, consumed } => {
                    assert!(text[start..].starts_with("<a"), "{text:?} @ {start}");
                    assert_eq!(consumed.start, start);
                    assert!(consumed.end > start);
                    assert!(consumed.end <= text.len());
                    assert_eq!(
                        span.to_string(),
                        &text[consumed.start..consumed.start + span.raw().len()]
                    );
                }
            }
        }
    }
}
