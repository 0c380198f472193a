/// An ordered, indexable sequence a cursor can read from.
///
/// Implementors expose their length and positional reads explicitly instead
/// of being recognised by shape. The cursor never mutates a subject.
pub trait Subject {
    /// The element yielded by positional reads.
    type Element;

    /// The contiguous sub-sequence produced when a frame is extracted.
    type Frame;

    /// Returns the number of elements, or `None` if the subject carries no
    /// length at all.
    fn length(&self) -> Option<usize>;

    /// Returns the element at `index`, or `None` if nothing is stored there.
    fn element_at(&self, index: usize) -> Option<Self::Element>;

    /// Extracts the elements in `start..end`.
    ///
    /// `end` is clamped to the furthest readable index and `start` to `end`,
    /// since a cursor is allowed to jump past the last element.
    fn extract(&self, start: usize, end: usize) -> Self::Frame;

    /// Returns true if the subject can be bound to a cursor: it has a known
    /// length and a present first element.
    fn is_valid(&self) -> bool {
        self.length().is_some() && self.element_at(0).is_some()
    }
}

/// Clamps a requested `start..end` range to a subject of `length` elements.
pub fn clamp_range(start: usize, end: usize, length: usize) -> (usize, usize) {
    let end = end.min(length);
    (start.min(end), end)
}

/// Copies `start..end` element by element into a dense vector indexed from 0.
///
/// This is the fallback for subjects with no native slicing. Missing entries
/// stay in place as `None` so indices line up with the source range.
pub fn copy_range<S>(subject: &S, start: usize, end: usize) -> Vec<Option<S::Element>>
where
    S: Subject + ?Sized,
{
    let (start, end) = clamp_range(start, end, subject.length().unwrap_or(0));
    (start..end).map(|index| subject.element_at(index)).collect()
}
