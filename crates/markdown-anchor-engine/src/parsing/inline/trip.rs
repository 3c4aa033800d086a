//! # Trip Characters
//!
//! A trip character is the leading character of an inline construct. The
//! engine only calls a recognizer at positions whose character is registered
//! for it, so it never has to run every recognizer at every byte.
//!
//! Recognizers register through a [`TripTableBuilder`] while the engine is
//! being constructed; [`TripTableBuilder::build`] freezes the result into a
//! [`TripTable`] that the engine owns and never mutates again.

use std::collections::BTreeMap;

/// Identifies a recognizer the engine can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecognizerId {
    /// `<a name="...">` anchors, see [`super::kinds::LinkAnchor`].
    LinkAnchor,
}

/// Collects `(trip char, recognizer)` registrations.
#[derive(Debug, Default)]
pub struct TripTableBuilder {
    entries: BTreeMap<char, Vec<RecognizerId>>,
}

impl TripTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` for `first`. Registration order is dispatch order for
    /// recognizers sharing a trip character; repeats are ignored.
    pub fn add(&mut self, first: char, id: RecognizerId) {
        let ids = self.entries.entry(first).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn build(self) -> TripTable {
        TripTable {
            entries: self.entries,
        }
    }
}

/// Frozen trip table owned by the inline engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripTable {
    entries: BTreeMap<char, Vec<RecognizerId>>,
}

impl TripTable {
    /// Recognizers to try, in order, at a position starting with `c`.
    pub fn recognizers_for(&self, c: char) -> &[RecognizerId] {
        self.entries.get(&c).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_trip(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// All registered trip characters in ascending order.
    pub fn trip_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Number of distinct trip characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
