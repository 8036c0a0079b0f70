//! Parser cursor with a one-step history and checkpoint/restore.

use super::token::Token;
use crate::model::{Chunk, Section};

/// Everything the lexer knows about one position in the chunk sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState<'a> {
    /// Index of the chunk in the sanitized sequence
    pub index: usize,
    /// Classification of the chunk
    pub token: Token,
    /// Chunk text, `None` past the end of input
    pub text: Option<&'a str>,
    /// Section the chunk belongs to
    pub section: Section,
    /// Whether the chunk is bold
    pub bold: bool,
    /// Vertical position, `None` past the end of input
    pub y: Option<f64>,
}

/// Current lexer position plus the state it held one step earlier.
///
/// `last` is needed for gap detection between neighbouring lines, and the
/// whole cursor, `last` included, is what a checkpoint restores.
#[derive(Debug, Clone, Default)]
pub struct Cursor<'a> {
    current: CursorState<'a>,
    last: CursorState<'a>,
}

/// Saved cursor, see [`Cursor::checkpoint`].
#[derive(Debug, Clone)]
pub struct Checkpoint<'a>(Cursor<'a>);

impl<'a> Cursor<'a> {
    /// Cursor resting on chunk `index`, before any classification.
    pub fn new(index: usize) -> Self {
        let current = CursorState {
            index,
            ..Default::default()
        };
        Self {
            current,
            last: current,
        }
    }

    pub fn index(&self) -> usize {
        self.current.index
    }

    pub fn token(&self) -> Token {
        self.current.token
    }

    /// Current text, empty past the end of input.
    pub fn text(&self) -> &'a str {
        self.current.text.unwrap_or("")
    }

    pub fn section(&self) -> Section {
        self.current.section
    }

    pub fn bold(&self) -> bool {
        self.current.bold
    }

    pub fn current(&self) -> &CursorState<'a> {
        &self.current
    }

    /// State before the most recent [`advance`](Self::advance).
    pub fn last(&self) -> &CursorState<'a> {
        &self.last
    }

    /// Move onto the next chunk. Token and section are carried over until the
    /// lexer classifies the new chunk.
    pub(crate) fn advance(&mut self, chunk: Option<&'a Chunk>) {
        self.last = self.current;
        self.current.index += 1;
        self.current.text = chunk.map(|c| c.text.as_str());
        self.current.bold = chunk.map(|c| c.bold).unwrap_or(false);
        self.current.y = chunk.map(|c| c.y);
    }

    pub(crate) fn set_classification(&mut self, token: Token, section: Section) {
        self.current.token = token;
        self.current.section = section;
    }

    /// Vertical distance from the previous chunk to the current one.
    pub fn gap(&self) -> Option<f64> {
        match (self.current.y, self.last.y) {
            (Some(current), Some(last)) => Some(current - last),
            _ => None,
        }
    }

    /// Save the full cursor state.
    pub fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint(self.clone())
    }

    /// Return to a saved state.
    pub fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        *self = checkpoint.0;
    }
}
