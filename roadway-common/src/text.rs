use std::fmt;
use std::sync::Arc;

use crate::subject::{clamp_range, Subject};
use crate::text_slice::TextSlice;

/// A text subject read one `char` at a time.
///
/// Positions count characters, not bytes. Character boundaries are computed
/// once up front so positional reads and frame extraction stay O(1).
#[derive(Clone)]
pub struct Text {
    buffer: Arc<str>,
    /// Byte offset of every character, followed by the buffer length.
    boundaries: Arc<[usize]>,
}

impl Text {
    /// Creates a text subject from the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a text subject over an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        let boundaries = buffer
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(buffer.len()))
            .collect();
        Self { buffer, boundaries }
    }

    /// Returns the number of characters.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the shared buffer.
    pub fn buffer(&self) -> Arc<str> {
        Arc::clone(&self.buffer)
    }
}

impl Subject for Text {
    type Element = char;
    type Frame = TextSlice;

    fn length(&self) -> Option<usize> {
        Some(self.char_len())
    }

    fn element_at(&self, index: usize) -> Option<char> {
        let start = *self.boundaries.get(index)?;
        self.buffer[start..].chars().next()
    }

    fn extract(&self, start: usize, end: usize) -> TextSlice {
        let (start, end) = clamp_range(start, end, self.char_len());
        TextSlice::new(
            self.buffer(),
            self.boundaries[start],
            self.boundaries[end],
        )
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Text {}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<&str> for Text {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Text {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

impl From<Arc<str>> for Text {
    fn from(buffer: Arc<str>) -> Self {
        Self::with_arc(buffer)
    }
}
