//! Error types raised by cursor operations.

use thiserror::Error;

/// Stable discriminator for matching on a [`RoadwayError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    FramingDisabled,
    EmptyFrame,
    Config,
}

/// Errors surfaced by [`Cursor`](crate::Cursor) and [`CursorConfig`](crate::CursorConfig).
///
/// Every error is fatal to the operation that raised it; the cursor never
/// recovers internally and never returns a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoadwayError {
    /// A subject was provided but is not a valid sequence.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// `record` or `flush` was called on a cursor built without framing.
    #[error("framing is disabled for this cursor")]
    FramingDisabled,

    /// `flush` was called with no recorded frame.
    #[error("no frame has been recorded")]
    EmptyFrame,

    /// A configuration document could not be parsed.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RoadwayError {
    /// Creates an [`InvalidInput`](Self::InvalidInput) error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::FramingDisabled => ErrorKind::FramingDisabled,
            Self::EmptyFrame => ErrorKind::EmptyFrame,
            Self::Config { .. } => ErrorKind::Config,
        }
    }
}

/// Result type alias using `RoadwayError`.
pub type Result<T> = std::result::Result<T, RoadwayError>;
