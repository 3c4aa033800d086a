/// A byte range `[start, end)` into the source text.
///
/// All parsed nodes store spans rather than copied text, enabling lossless
/// round-trip: slicing the source with any span reproduces the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts both ends by `base`, turning a local span into an absolute one.
    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }

    /// Borrows the text this span covers, or `None` if it is out of bounds
    /// or splits a UTF-8 character.
    pub fn slice(self, s: &str) -> Option<&str> {
        s.get(self.start..self.end)
    }
}
