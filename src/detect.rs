//! Chunk-stream format detection.
//!
//! Text extraction runs outside this crate; its output reaches us as JSON,
//! either a single array of chunk objects or JSON Lines with one chunk
//! object per line.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Layout of a serialized chunk stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkFormat {
    /// `[{"text": ..., "bold": ..., "y": ...}, ...]`
    JsonArray,
    /// One chunk object per line
    JsonLines,
}

impl std::fmt::Display for ChunkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkFormat::JsonArray => write!(f, "JSON array"),
            ChunkFormat::JsonLines => write!(f, "JSON Lines"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: usize = 512;

/// Detect the chunk format of a file.
///
/// # Example
/// ```no_run
/// use linkedin_pdf_to_json::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("profile.chunks.json").unwrap();
/// println!("Input is {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ChunkFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut header = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the chunk format from the leading bytes of the input.
///
/// # Returns
/// * `Ok(ChunkFormat)` when the first significant byte opens an array or object
/// * `Err(Error::UnknownFormat)` otherwise, including raw PDF files
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ChunkFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    if is_pdf_bytes(data) {
        log::warn!("Input is a raw PDF; run text extraction before parsing");
        return Err(Error::UnknownFormat);
    }

    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => Ok(ChunkFormat::JsonArray),
        Some(b'{') => Ok(ChunkFormat::JsonLines),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes look like a raw PDF rather than extracted chunks.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}
