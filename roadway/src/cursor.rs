use roadway_common::Subject;

use crate::config::CursorConfig;
use crate::error::{Result, RoadwayError};

/// A forward-only cursor over a [`Subject`].
///
/// The cursor tracks a read position, supports lookahead with [`peek`](Self::peek)
/// and consumption with [`next`](Self::next). When built with framing enabled it
/// can also [`record`](Self::record) a start position and later
/// [`flush`](Self::flush) the elements between that mark and the current
/// position.
///
/// A cursor may be created without a subject. Reads against it return `None`,
/// but [`eof`](Self::eof) reports `false` until a subject is bound, so a
/// `while !cursor.eof()` loop over an unbound cursor never terminates.
#[derive(Debug, Clone)]
pub struct Cursor<S: Subject> {
    subject: Option<S>,
    position: usize,
    frame_start: Option<usize>,
    config: CursorConfig,
}

impl<S: Subject> Cursor<S> {
    /// Creates a cursor bound to `subject`, or unbound if `subject` is `None`.
    ///
    /// # Errors
    /// Returns [`RoadwayError::InvalidInput`] if a subject is given but is not
    /// valid (no length or no first element).
    pub fn new(subject: Option<S>, config: CursorConfig) -> Result<Self> {
        if let Some(subject) = &subject {
            validate(subject)?;
        }

        Ok(Self::bind(subject, config))
    }

    /// Creates a cursor over `subject` with the default configuration.
    pub fn over(subject: S) -> Result<Self> {
        Self::new(Some(subject), CursorConfig::default())
    }

    /// Creates a cursor over `subject` with framing enabled.
    pub fn framed(subject: S) -> Result<Self> {
        Self::new(Some(subject), CursorConfig::framed())
    }

    /// Creates a cursor with no subject bound.
    pub fn unbound(config: CursorConfig) -> Self {
        Self::bind(None, config)
    }

    fn bind(subject: Option<S>, config: CursorConfig) -> Self {
        Self {
            subject,
            position: 0,
            frame_start: None,
            config,
        }
    }

    /// Returns the current read offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bound subject, if any.
    pub fn subject(&self) -> Option<&S> {
        self.subject.as_ref()
    }

    /// Returns the start of the active frame, if one has been recorded.
    pub fn frame_start(&self) -> Option<usize> {
        self.frame_start
    }

    /// Returns the configuration fixed at construction.
    pub fn config(&self) -> CursorConfig {
        self.config
    }

    /// Returns true if `record` and `flush` are permitted.
    pub fn is_framed(&self) -> bool {
        self.config.framed
    }

    /// Rewinds to the beginning and drops any active frame. If `subject` is
    /// given it replaces the bound subject.
    ///
    /// # Errors
    /// Returns [`RoadwayError::InvalidInput`] if `subject` is not valid. The
    /// cursor is left untouched in that case.
    pub fn reset(&mut self, subject: Option<S>) -> Result<()> {
        if let Some(subject) = subject {
            validate(&subject)?;
            self.subject = Some(subject);
        }

        self.rewind();
        Ok(())
    }

    /// Rewinds to the beginning of the bound subject and drops any active frame.
    pub fn rewind(&mut self) {
        tracing::trace!(from = self.position, "cursor reset");
        self.position = 0;
        self.frame_start = None;
    }

    /// Returns the element `offset` positions ahead without advancing.
    ///
    /// Reads at or past the end of input return `None`.
    pub fn peek(&self, offset: usize) -> Option<S::Element> {
        if self.eof(offset) {
            return None;
        }

        let index = self.position.checked_add(offset)?;
        self.subject.as_ref()?.element_at(index)
    }

    /// Returns the current element and, if there was one, advances by
    /// `offset + 1`.
    ///
    /// The returned element is always the one at the position before the
    /// jump, so `next(n)` consumes the current element and skips `n` more.
    /// At the end of input this returns `None` and the position stays put.
    pub fn next(&mut self, offset: usize) -> Option<S::Element> {
        let element = self.peek(0)?;
        self.position = self.position.saturating_add(offset).saturating_add(1);
        Some(element)
    }

    /// Returns true if `position + offset` is at or past the end of the
    /// bound subject.
    ///
    /// An unbound subject, or one with no length or a zero length, never
    /// reports end of input.
    pub fn eof(&self, offset: usize) -> bool {
        match self.subject.as_ref().and_then(Subject::length) {
            Some(length) if length > 0 => self.position.saturating_add(offset) >= length,
            _ => false,
        }
    }

    /// Marks the current position as the start of a frame, replacing any
    /// frame already recorded.
    ///
    /// # Errors
    /// Returns [`RoadwayError::FramingDisabled`] unless the cursor was built
    /// with framing.
    pub fn record(&mut self) -> Result<()> {
        self.ensure_framed("record")?;
        tracing::trace!(start = self.position, "frame recorded");
        self.frame_start = Some(self.position);
        Ok(())
    }

    /// Returns the elements from the recorded start up to (not including)
    /// the current position and clears the frame.
    ///
    /// # Errors
    /// Returns [`RoadwayError::FramingDisabled`] unless the cursor was built
    /// with framing, and [`RoadwayError::EmptyFrame`] if no frame is active
    /// or no subject is bound.
    pub fn flush(&mut self) -> Result<S::Frame> {
        self.ensure_framed("flush")?;
        let start = self.frame_start.take().ok_or(RoadwayError::EmptyFrame)?;
        let subject = self.subject.as_ref().ok_or(RoadwayError::EmptyFrame)?;

        tracing::trace!(start, end = self.position, "frame flushed");
        Ok(subject.extract(start, self.position))
    }

    fn ensure_framed(&self, operation: &'static str) -> Result<()> {
        if self.config.framed {
            Ok(())
        } else {
            tracing::debug!(operation, "framing call refused on an unframed cursor");
            Err(RoadwayError::FramingDisabled)
        }
    }
}

fn validate<S: Subject>(subject: &S) -> Result<()> {
    if subject.length().is_none() {
        tracing::debug!("rejected subject without a length");
        return Err(RoadwayError::invalid_input("subject has no length"));
    }
    if !subject.is_valid() {
        tracing::debug!("rejected subject without a first element");
        return Err(RoadwayError::invalid_input("subject has no element at index 0"));
    }
    Ok(())
}
