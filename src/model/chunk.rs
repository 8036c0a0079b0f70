//! Input text chunks.

use serde::{Deserialize, Serialize};

/// One line of extracted PDF text.
///
/// Chunks arrive in reading order, top to bottom. `y` is only compared
/// between neighbouring chunks to find paragraph gaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content
    #[serde(default)]
    pub text: String,
    /// Whether the line was set in a bold font
    #[serde(default)]
    pub bold: bool,
    /// Vertical position of the line
    #[serde(default, alias = "yPosition")]
    pub y: f64,
}

impl Chunk {
    /// Create a regular-weight chunk.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            y: 0.0,
        }
    }

    /// Create a bold chunk.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            y: 0.0,
        }
    }

    /// Set the vertical position.
    pub fn at(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Whether the chunk carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Chunk::new(text)
    }
}
