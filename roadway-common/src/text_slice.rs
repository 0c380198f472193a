use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A frame cut out of a [`Text`](crate::Text) subject.
///
/// The slice shares the subject's `Arc<str>` buffer, so extracting a frame
/// never copies the text. It dereferences to `str`.
#[derive(Clone, Debug)]
pub struct TextSlice {
    buffer: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSlice {
    /// Creates a slice over the byte range `start..end` of `buffer`.
    ///
    /// Both offsets must fall on character boundaries.
    pub fn new(buffer: Arc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        debug_assert!(buffer.is_char_boundary(start) && buffer.is_char_boundary(end));
        Self { buffer, start, end }
    }

    /// Returns the slice as `&str`.
    pub fn as_str(&self) -> &str {
        &self.buffer[self.start..self.end]
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range this slice covers in the shared buffer.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Returns the shared buffer the slice points into.
    pub fn buffer(&self) -> Arc<str> {
        Arc::clone(&self.buffer)
    }
}

impl fmt::Display for TextSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice {}

impl PartialEq<str> for TextSlice {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq<String> for TextSlice {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl From<TextSlice> for String {
    fn from(slice: TextSlice) -> Self {
        slice.as_str().to_owned()
    }
}
