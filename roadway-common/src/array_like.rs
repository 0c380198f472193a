use std::collections::BTreeMap;

use crate::subject::{clamp_range, Subject};

/// An integer-keyed map posing as a sequence.
///
/// Entries may be sparse, and the `length` field is carried separately from
/// the entries, the same way a hand-built array-like record would be. A
/// missing `length` makes the subject invalid. Reads ignore `length` and
/// look up the entry directly; a hole reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLike<T> {
    entries: BTreeMap<usize, T>,
    length: Option<usize>,
}

impl<T> ArrayLike<T> {
    /// Creates an empty array-like with no length.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            length: None,
        }
    }

    /// Creates an array-like from explicit `(index, value)` entries.
    ///
    /// The length is left unset; use [`with_length`](Self::with_length).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            length: None,
        }
    }

    /// Sets the `length` field.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Stores `value` at `index`, leaving `length` untouched.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.entries.insert(index, value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    /// Returns the number of stored entries, which may differ from `length`.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the furthest readable extent: `length` or one past the last
    /// stored key, whichever is larger.
    pub fn extent(&self) -> usize {
        let past_last = self.entries.keys().next_back().map_or(0, |key| key + 1);
        self.length.unwrap_or(0).max(past_last)
    }
}

impl<T> Default for ArrayLike<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Subject for ArrayLike<T> {
    type Element = T;
    type Frame = Vec<Option<T>>;

    fn length(&self) -> Option<usize> {
        self.length
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.entries.get(&index).cloned()
    }

    /// Copies entries one by one, bounded by [`extent`](Self::extent) rather
    /// than `length`, since reads never consult `length` either.
    fn extract(&self, start: usize, end: usize) -> Vec<Option<T>> {
        let (start, end) = clamp_range(start, end, self.extent());
        (start..end).map(|index| self.element_at(index)).collect()
    }
}

/// Builds a dense array-like whose length matches the number of items.
impl<T> FromIterator<T> for ArrayLike<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let entries: BTreeMap<usize, T> = iter.into_iter().enumerate().collect();
        let length = entries.len();
        Self {
            entries,
            length: Some(length),
        }
    }
}
