use std::fmt;

use crate::parsing::inline::{
    markup,
    trip::{RecognizerId, TripTableBuilder},
    types::ParseOutcome,
};
use crate::parsing::rope::span::Span;

/// A named link target written as raw HTML: `<a name="top"></a>` or
/// `<a name="top"/>`.
///
/// Built once per match and never modified. `Display` writes back the
/// matched source verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSpan {
    raw: String,
    link: Option<String>,
}

impl AnchorSpan {
    /// The exact source text matched, delimiters included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `name` attribute, if the embedded markup could be read.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

impl fmt::Display for AnchorSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Link anchor inline type with owned delimiter constants.
pub struct LinkAnchor;

impl LinkAnchor {
    pub const TRIP: char = '<';
    pub const OPEN: &'static [u8; 2] = b"<a";
    pub const CLOSE: &'static [u8; 4] = b"</a>";
    pub const SELF_CLOSE: &'static [u8; 2] = b"/>";
    pub const NAME_ATTR: &'static str = "name";

    pub fn add_trip_chars(trips: &mut TripTableBuilder) {
        trips.add(Self::TRIP, RecognizerId::LinkAnchor);
    }

    /// Attempts to recognize an anchor starting at byte `start` of `text`,
    /// looking no further than `max_end`.
    ///
    /// A closing `</a>` anywhere in range wins over `/>`. The span is
    /// rejected if another `<a` opens before it closes. A space directly
    /// after the anchor is consumed but is not part of [`AnchorSpan::raw`].
    pub fn parse(text: &str, start: usize, max_end: usize) -> ParseOutcome<AnchorSpan> {
        let bytes = text.as_bytes();
        let max_end = max_end.min(bytes.len());
        if start >= max_end || max_end - start < Self::OPEN.len() {
            return ParseOutcome::NoMatch;
        }
        if &bytes[start..start + Self::OPEN.len()] != Self::OPEN {
            return ParseOutcome::NoMatch;
        }

        let inner_start = start + Self::OPEN.len();
        let window = &bytes[inner_start..max_end];
        let (inner_end, mut true_end) = match find(window, Self::CLOSE) {
            Some(at) => (inner_start + at, inner_start + at + Self::CLOSE.len()),
            None => match find(window, Self::SELF_CLOSE) {
                Some(at) => (inner_start + at, inner_start + at + Self::SELF_CLOSE.len()),
                None => {
                    log::trace!("anchor at {start} is never closed before {max_end}");
                    return ParseOutcome::NoMatch;
                }
            },
        };

        if let Some(at) = find(window, Self::OPEN)
            && inner_start + at < inner_end
        {
            log::trace!(
                "anchor at {start} overlaps another opened at {}",
                inner_start + at
            );
            return ParseOutcome::NoMatch;
        }

        let Some(raw) = text.get(start..true_end) else {
            return ParseOutcome::NoMatch;
        };
        let link = markup::attribute_value(raw, Self::NAME_ATTR)
            .inspect_err(|err| log::debug!("anchor at {start} has no usable name: {err}"))
            .ok();

        if true_end < max_end && bytes[true_end] == b' ' {
            true_end += 1;
        }

        ParseOutcome::Matched {
            span: AnchorSpan {
                raw: raw.to_owned(),
                link,
            },
            consumed: Span {
                start,
                end: true_end,
            },
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
