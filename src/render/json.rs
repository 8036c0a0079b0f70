//! JSON rendering for parsed profiles.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::Profile;

/// Indentation used by [`JsonFormat::Pretty`].
pub const DEFAULT_INDENT: usize = 4;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Pretty-printed JSON with the given number of spaces
    Indented(usize),
    /// Compact JSON without extra whitespace
    Compact,
}

impl JsonFormat {
    /// Indented output, or compact for a width of zero.
    pub fn with_indent(spaces: usize) -> Self {
        if spaces == 0 {
            JsonFormat::Compact
        } else {
            JsonFormat::Indented(spaces)
        }
    }

    fn indent(self) -> Option<usize> {
        match self {
            JsonFormat::Pretty => Some(DEFAULT_INDENT),
            JsonFormat::Indented(spaces) => Some(spaces),
            JsonFormat::Compact => None,
        }
    }
}

/// Convert a profile to JSON.
pub fn to_json(profile: &Profile, format: JsonFormat) -> Result<String> {
    let mut buffer = Vec::new();
    to_writer(profile, format, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("JSON is not UTF-8: {}", e)))
}

/// Serialize a profile into any writer.
pub fn to_writer<W: Write>(profile: &Profile, format: JsonFormat, writer: W) -> Result<()> {
    let result = match format.indent() {
        Some(spaces) => {
            let indent = " ".repeat(spaces);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(writer, formatter);
            profile.serialize(&mut serializer)
        }
        None => serde_json::to_writer(writer, profile),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write a profile to a JSON file, replacing any existing file.
pub fn write_json<P: AsRef<Path>>(profile: &Profile, format: JsonFormat, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(profile, format, &mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        let mut profile = Profile::new("Jane Doe", "Engineer");
        profile.skills = Some(vec!["Rust".to_string()]);
        profile
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&profile(), JsonFormat::Pretty).unwrap();
        assert!(json.starts_with("{\n    \"name\": \"Jane Doe\""));
        assert!(json.contains("\n        \"Rust\""));
    }

    #[test]
    fn test_to_json_indented() {
        let json = to_json(&profile(), JsonFormat::Indented(2)).unwrap();
        assert!(json.starts_with("{\n  \"name\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&profile(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Jane Doe","currentJob":"Engineer","skills":["Rust"]}"#
        );
    }

    #[test]
    fn test_with_indent() {
        assert_eq!(JsonFormat::with_indent(0), JsonFormat::Compact);
        assert_eq!(JsonFormat::with_indent(4), JsonFormat::Indented(4));
        assert_eq!(JsonFormat::default(), JsonFormat::Pretty);
    }
}
