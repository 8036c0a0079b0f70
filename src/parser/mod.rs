//! Chunk stream parsing module.

mod cursor;
mod lexer;
mod options;
mod profile_parser;
mod sanitize;
mod sections;
mod text;
mod token;

pub use cursor::{Checkpoint, Cursor, CursorState};
pub use lexer::{Lexer, DEFAULT_NEWLINE_GAP};
pub use options::ParseOptions;
pub use profile_parser::{decode_chunks, ProfileParser};
pub use sanitize::Sanitizer;
pub use sections::{split_dates, split_duration, split_title, SectionParser};
pub use text::{has_bulleted_text, read_content, BulletedText};
pub use token::Token;
