//! Error types for linkedin-pdf-to-json.

use std::io;
use thiserror::Error;

/// Result type alias for profile parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning chunks into a profile.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognizable chunk stream.
    #[error("Unknown input format: expected a JSON array or JSON Lines of text chunks")]
    UnknownFormat,

    /// Chunk or locale JSON could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The lexer could not classify a text chunk under the active section's rules.
    #[error("TokenError: could not successfully set the token for the following text chunk: '{text}' (profile: {profile})")]
    Token {
        /// The offending chunk text
        text: String,
        /// Name of the profile being parsed
        profile: String,
    },

    /// A section parser met a token sequence its grammar does not accept.
    #[error("ParsingError: could not successfully parse the following text chunk: '{text}' (profile: {profile}): {reason}")]
    Parsing {
        /// The offending chunk text
        text: String,
        /// Name of the profile being parsed
        profile: String,
        /// What the grammar expected
        reason: String,
    },

    /// The input ended before a required leading line.
    #[error("Missing required chunk: {0}")]
    MissingChunk(&'static str),

    /// No locale is registered under the requested tag.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A locale document is structurally invalid.
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// A locale pattern failed to compile.
    #[error("Invalid locale pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Error during JSON rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error came from the lexer or a section parser, as opposed
    /// to I/O or configuration.
    pub fn is_grammar_error(&self) -> bool {
        matches!(self, Error::Token { .. } | Error::Parsing { .. })
    }
}
