//! # linkedin-pdf-to-json
//!
//! Turns the text of a LinkedIn profile PDF export into structured JSON.
//!
//! Text extraction happens upstream: this crate reads the extracted lines
//! ("chunks", each with its text, a bold flag and a vertical position) and
//! runs a small recursive-descent grammar over them to recover the profile's
//! sections.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkedin_pdf_to_json::{parse_file, render};
//!
//! fn main() -> linkedin_pdf_to_json::Result<()> {
//!     let profile = parse_file("profile.chunks.json")?;
//!
//!     let json = render::to_json(&profile, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Sections**: summary, education, experience, volunteer experience,
//!   languages, skills; everything else is kept as raw lines
//! - **Formatting**: bulleted descriptions become one entry per bullet
//! - **Locales**: English, Portuguese and Spanish exports bundled, more
//!   loadable from JSON
//! - **Parallel processing**: uses Rayon for batches of profiles

pub mod detect;
pub mod error;
pub mod locale;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, ChunkFormat};
pub use error::{Error, Result};
pub use locale::{Locale, LocaleRegistry};
pub use model::{Chunk, Education, Job, Language, Profile, Section};
pub use parser::{ParseOptions, ProfileParser};
pub use render::{JsonFormat, DEFAULT_INDENT};

use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

/// Parse a profile from already-extracted chunks.
///
/// # Example
///
/// ```
/// use linkedin_pdf_to_json::{parse_chunks, Chunk};
///
/// let chunks = vec![
///     Chunk::new("Jane Doe"),
///     Chunk::new("Software Engineer"),
///     Chunk::new("jane@example.com"),
///     Chunk::new("Skills & Expertise"),
///     Chunk::new("Rust"),
///     Chunk::new("Contact Jane Doe on LinkedIn"),
/// ];
/// let profile = parse_chunks(chunks).unwrap();
/// assert_eq!(profile.skills, Some(vec!["Rust".to_string()]));
/// ```
pub fn parse_chunks(chunks: Vec<Chunk>) -> Result<Profile> {
    ProfileParser::from_chunks(chunks)?.parse()
}

/// Parse a profile from chunks with custom options.
pub fn parse_chunks_with_options(chunks: Vec<Chunk>, options: ParseOptions) -> Result<Profile> {
    ProfileParser::from_chunks_with_options(chunks, options)?.parse()
}

/// Parse a chunk file (JSON array or JSON Lines).
///
/// # Arguments
///
/// * `path` - Path to the chunk file
///
/// # Example
///
/// ```no_run
/// use linkedin_pdf_to_json::parse_file;
///
/// let profile = parse_file("profile.chunks.json").unwrap();
/// println!("{} ({})", profile.name, profile.current_job);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Profile> {
    ProfileParser::open(path)?.parse()
}

/// Parse a chunk file with custom options.
///
/// # Example
///
/// ```no_run
/// use linkedin_pdf_to_json::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_locale_tag("pt-BR");
/// let profile = parse_file_with_options("perfil.chunks.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Profile> {
    ProfileParser::open_with_options(path, options)?.parse()
}

/// Parse a serialized chunk stream held in memory.
pub fn parse_bytes(data: &[u8]) -> Result<Profile> {
    ProfileParser::from_bytes(data)?.parse()
}

/// Parse a serialized chunk stream with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Profile> {
    ProfileParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse a serialized chunk stream held in a string.
pub fn parse_str(data: &str) -> Result<Profile> {
    parse_bytes(data.as_bytes())
}

/// Parse a serialized chunk stream held in a string with custom options.
pub fn parse_str_with_options(data: &str, options: ParseOptions) -> Result<Profile> {
    parse_bytes_with_options(data.as_bytes(), options)
}

/// Parse a chunk stream from a reader.
///
/// # Example
///
/// ```no_run
/// use linkedin_pdf_to_json::parse_reader;
///
/// let profile = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Profile> {
    ProfileParser::from_reader(reader)?.parse()
}

/// Parse a chunk stream from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Profile> {
    ProfileParser::from_reader_with_options(reader, options)?.parse()
}

/// Parse several chunk files.
///
/// The locale is resolved once for the whole batch; failing that is the only
/// error returned directly. Per-file results come back in input order. With
/// `options.parallel` set the files are parsed on the Rayon pool.
///
/// # Example
///
/// ```no_run
/// use linkedin_pdf_to_json::{parse_many, ParseOptions};
///
/// let results = parse_many(&["a.json", "b.json"], &ParseOptions::default())?;
/// for result in results {
///     match result {
///         Ok(profile) => println!("{}", profile.name),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// # Ok::<(), linkedin_pdf_to_json::Error>(())
/// ```
pub fn parse_many<P>(paths: &[P], options: &ParseOptions) -> Result<Vec<Result<Profile>>>
where
    P: AsRef<Path> + Sync,
{
    let options = options.clone().with_locale(options.resolve_locale()?);
    log::debug!("Parsing {} profiles (parallel: {})", paths.len(), options.parallel);

    let parse_one = |path: &P| parse_file_with_options(path, options.clone());
    let results = if options.parallel {
        paths.par_iter().map(parse_one).collect()
    } else {
        paths.iter().map(parse_one).collect()
    };
    Ok(results)
}

/// Parse a chunk file, loading it with Tokio's async file API.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> linkedin_pdf_to_json::Result<()> {
/// use linkedin_pdf_to_json::{parse_file_async, ParseOptions};
///
/// let profile = parse_file_async("profile.chunks.json", ParseOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Profile> {
    let data = tokio::fs::read(path.as_ref()).await?;
    parse_bytes_with_options(&data, options)
}

/// Builder for parsing profiles and writing them out.
///
/// # Example
///
/// ```no_run
/// use linkedin_pdf_to_json::ProfileExtractor;
///
/// ProfileExtractor::new()
///     .with_locale_tag("es")
///     .with_indent(2)
///     .parse("perfil.chunks.json")?
///     .write_json("perfil.json")?;
/// # Ok::<(), linkedin_pdf_to_json::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileExtractor {
    parse_options: ParseOptions,
    format: JsonFormat,
}

impl ProfileExtractor {
    /// Create a new extractor builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.parse_options = self.parse_options.with_locale(locale);
        self
    }

    /// Use a bundled locale by tag.
    pub fn with_locale_tag(mut self, tag: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_locale_tag(tag);
        self
    }

    /// Set the paragraph gap.
    pub fn with_newline_gap(mut self, gap: f64) -> Self {
        self.parse_options = self.parse_options.with_newline_gap(gap);
        self
    }

    /// Keep localized dates and durations as printed.
    pub fn keep_vocabulary(mut self) -> Self {
        self.parse_options = self.parse_options.with_vocabulary_normalization(false);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Indent output with `spaces` spaces, compact for zero.
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.format = JsonFormat::with_indent(spaces);
        self
    }

    /// Compact output.
    pub fn compact(mut self) -> Self {
        self.format = JsonFormat::Compact;
        self
    }

    /// Parse a chunk file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ExtractResult> {
        let profile = parse_file_with_options(path, self.parse_options)?;
        Ok(ExtractResult {
            profile,
            format: self.format,
        })
    }

    /// Parse a serialized chunk stream.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ExtractResult> {
        let profile = parse_bytes_with_options(data, self.parse_options)?;
        Ok(ExtractResult {
            profile,
            format: self.format,
        })
    }

    /// Parse already-extracted chunks.
    pub fn parse_chunks(self, chunks: Vec<Chunk>) -> Result<ExtractResult> {
        let profile = parse_chunks_with_options(chunks, self.parse_options)?;
        Ok(ExtractResult {
            profile,
            format: self.format,
        })
    }

    /// Parse several chunk files, writing `<stem>.json` for each into
    /// `output_dir`. Returns one result per input, in input order.
    pub fn convert_many<P>(&self, paths: &[P], output_dir: &Path) -> Result<Vec<Result<PathBuf>>>
    where
        P: AsRef<Path> + Sync,
    {
        let results = parse_many(paths, &self.parse_options)?;
        Ok(results
            .into_iter()
            .zip(paths)
            .map(|(result, source)| {
                let target = output_dir.join(json_file_name(source.as_ref()));
                render::write_json(&result?, self.format, &target)?;
                Ok(target)
            })
            .collect())
    }
}

/// `profile.chunks.json` becomes `profile.json`.
fn json_file_name(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("profile");
    let stem = name
        .strip_suffix(".json")
        .or_else(|| name.strip_suffix(".jsonl"))
        .unwrap_or(name);
    let stem = stem.strip_suffix(".chunks").unwrap_or(stem);
    PathBuf::from(format!("{}.json", stem))
}

/// Result of parsing a profile.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The parsed profile
    pub profile: Profile,
    /// Output format to use
    format: JsonFormat,
}

impl ExtractResult {
    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.profile, self.format)
    }

    /// Write JSON to a file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_json(&self.profile, self.format, path)
    }

    /// Get the profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
