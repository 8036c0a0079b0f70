//! Rendering module for writing profiles as JSON.

mod json;

pub use json::{to_json, to_writer, write_json, JsonFormat, DEFAULT_INDENT};
