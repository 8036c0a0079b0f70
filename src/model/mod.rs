//! Data model for profile extraction.
//!
//! `Chunk` is the input side: one line of text handed over by the PDF text
//! extractor. `Profile` and its records are the output side, serialized
//! as-is to JSON.

mod chunk;
mod profile;

pub use chunk::Chunk;
pub use profile::{Education, Job, Language, Profile, Section};
