//! Free-text accumulation for summaries and job descriptions.
//!
//! A run of content chunks is read in one of two modes. If any chunk in the
//! run is bulleted or starts after a paragraph gap, every such chunk opens a
//! new item and the others are folded into the current one. Otherwise the run
//! is concatenated into a single string.

use super::lexer::Lexer;
use super::token::Token;
use crate::error::Result;

/// Items of a bulleted run, built one chunk at a time.
#[derive(Debug, Default)]
pub struct BulletedText {
    items: Vec<String>,
    in_bulleted: bool,
}

impl BulletedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chunk. `starts_item` is true for bulleted or gapped chunks.
    pub fn push(&mut self, text: &str, starts_item: bool) {
        if starts_item {
            self.in_bulleted = true;
            self.items.push(text.to_string());
            return;
        }

        if self.in_bulleted && is_indented_continuation(text) {
            if let Some(item) = self.items.last_mut() {
                item.push_str(text);
                return;
            }
        }

        self.in_bulleted = false;
        match self.items.last_mut() {
            Some(item) => {
                if ends_with_non_space(item) && starts_with_non_space(text) {
                    item.push(' ');
                }
                item.push_str(text);
            }
            None => self.items.push(text.to_string()),
        }
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Exactly one leading whitespace character, then text.
fn is_indented_continuation(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_whitespace() && !second.is_whitespace()
    )
}

fn starts_with_non_space(text: &str) -> bool {
    text.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn ends_with_non_space(text: &str) -> bool {
    text.chars().next_back().is_some_and(|c| !c.is_whitespace())
}

/// Whether any chunk of the content run under the cursor is bulleted or
/// gapped. The cursor is left where it was.
pub fn has_bulleted_text(lexer: &mut Lexer<'_>) -> Result<bool> {
    let checkpoint = lexer.checkpoint();
    let mut found = false;
    while lexer.token() == Token::SectionContent {
        if lexer.starts_item() {
            found = true;
            break;
        }
        lexer.next_token()?;
    }
    lexer.restore(checkpoint);
    Ok(found)
}

/// Consume the content run under the cursor.
///
/// Leaves the lexer on the first token after the run.
pub fn read_content(lexer: &mut Lexer<'_>) -> Result<Vec<String>> {
    if has_bulleted_text(lexer)? {
        let mut text = BulletedText::new();
        while lexer.token() == Token::SectionContent {
            text.push(lexer.text(), lexer.starts_item());
            lexer.next_token()?;
        }
        Ok(text.into_items())
    } else {
        let mut text = String::new();
        while lexer.token() == Token::SectionContent {
            text.push_str(lexer.text());
            lexer.next_token()?;
        }
        Ok(vec![text])
    }
}
