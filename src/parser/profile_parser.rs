//! Chunk stream parser producing a [`Profile`].

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::detect::{detect_format_from_bytes, ChunkFormat, UTF8_BOM};
use crate::error::Result;
use crate::locale::Locale;
use crate::model::{Chunk, Profile};

use super::options::ParseOptions;
use super::sanitize::Sanitizer;
use super::sections::SectionParser;

/// LinkedIn profile parser.
///
/// Holds the raw chunk stream of one profile export and the options to parse
/// it with. [`parse`](Self::parse) can be called any number of times.
pub struct ProfileParser {
    chunks: Vec<Chunk>,
    locale: Arc<Locale>,
    options: ParseOptions,
}

impl ProfileParser {
    /// Open a chunk file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a chunk file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading chunks from {}", path.display());
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a chunk stream from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a chunk stream from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let chunks = decode_chunks(data)?;
        Self::from_chunks_with_options(chunks, options)
    }

    /// Parse a chunk stream from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a chunk stream from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap already-decoded chunks.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Result<Self> {
        Self::from_chunks_with_options(chunks, ParseOptions::default())
    }

    /// Wrap already-decoded chunks with custom options.
    pub fn from_chunks_with_options(chunks: Vec<Chunk>, options: ParseOptions) -> Result<Self> {
        let locale = options.resolve_locale()?;
        Ok(Self {
            chunks,
            locale,
            options,
        })
    }

    /// Sanitize a copy of the chunks and run the grammar over it.
    pub fn parse(&self) -> Result<Profile> {
        let mut chunks = self.chunks.clone();
        let removed = Sanitizer::new(&self.locale).sanitize(&mut chunks);
        log::debug!(
            "Parsing {} chunks ({} page markers removed, locale {})",
            chunks.len(),
            removed,
            self.locale.tag()
        );
        SectionParser::new(&chunks, &self.locale, &self.options)?.parse()
    }

    /// Raw chunks as loaded.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Decode a serialized chunk stream, either a JSON array or JSON Lines.
pub fn decode_chunks(data: &[u8]) -> Result<Vec<Chunk>> {
    let format = detect_format_from_bytes(data)?;
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    log::debug!("Decoding {} chunk stream", format);

    let chunks = match format {
        ChunkFormat::JsonArray => serde_json::from_slice(data)?,
        ChunkFormat::JsonLines => serde_json::Deserializer::from_slice(data)
            .into_iter::<Chunk>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };
    Ok(chunks)
}
