//! Cursor configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadwayError};

/// Options fixed when a cursor is created.
///
/// ```toml
/// # Allow record/flush
/// framed = true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Whether `record` and `flush` are permitted.
    pub framed: bool,
}

impl CursorConfig {
    /// A configuration with framing enabled.
    pub fn framed() -> Self {
        Self { framed: true }
    }

    /// Parses a configuration from a TOML document. Missing keys keep their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`RoadwayError::Config`] if the document is not valid TOML or
    /// a key has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| RoadwayError::Config {
            message: format!("failed to parse cursor config: {e}"),
        })
    }
}
