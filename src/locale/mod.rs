//! Locale tables.
//!
//! A locale tells the parser how a profile export reads in one language:
//! section header labels, names of sections without a dedicated grammar,
//! the patterns that recognize dates, durations and proficiencies, and the
//! vocabulary that maps localized dates and durations back to English.
//!
//! Locales are versioned JSON documents. `en`, `pt` and `es` are bundled;
//! others can be loaded with [`Locale::from_path`] and added to a
//! [`LocaleRegistry`].

mod patterns;
mod registry;

pub use patterns::{Patterns, Vocabulary};
pub use registry::LocaleRegistry;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::Section;

/// Locale document version understood by this crate.
pub const LOCALE_VERSION: u32 = 1;

/// Tag of the locale used when none is requested.
pub const DEFAULT_LOCALE: &str = "en";

/// Bundled locale documents, keyed by language tag.
pub(crate) const BUNDLED: [(&str, &str); 3] = [
    ("en", include_str!("../../locales/en.json")),
    ("pt", include_str!("../../locales/pt.json")),
    ("es", include_str!("../../locales/es.json")),
];

/// Raw locale document, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDefinition {
    /// Document format version
    pub version: u32,
    /// Language tag, e.g. `en`
    pub tag: String,
    /// Localized word printed before page numbers
    pub page: String,
    /// Label used for the recommendations pseudo-section
    pub recommendations: String,
    /// Header label of every supported section
    pub section_headers: HashMap<Section, String>,
    /// Header labels of sections collected as raw lines
    pub unsupported_sections: Vec<String>,
    /// Education label prefixes
    pub markers: Markers,
    /// Regular expression sources
    pub patterns: PatternSources,
    /// Localized-to-English substitutions
    #[serde(default)]
    pub vocabulary: VocabularyTables,
}

/// Education label prefixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Markers {
    pub grade: String,
    pub activities_and_societies: String,
}

/// Regular expression sources of a locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSources {
    pub language_proficiency: String,
    pub job_title: String,
    pub date_range: String,
    pub date_separator: String,
    pub job_duration: String,
    pub degree: String,
}

/// Substitution tables for dates and durations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyTables {
    #[serde(default)]
    pub dates: HashMap<String, String>,
    #[serde(default)]
    pub duration: HashMap<String, String>,
}

/// A validated locale with compiled patterns.
#[derive(Debug, Clone)]
pub struct Locale {
    definition: LocaleDefinition,
    headers: HashMap<String, Section>,
    unsupported: HashSet<String>,
    patterns: Patterns,
    dates: Vocabulary,
    duration: Vocabulary,
}

impl Locale {
    /// Validate and compile a locale definition.
    pub fn new(definition: LocaleDefinition) -> Result<Self> {
        if definition.version != LOCALE_VERSION {
            return Err(Error::InvalidLocale(format!(
                "{}: unsupported locale version {} (expected {})",
                definition.tag, definition.version, LOCALE_VERSION
            )));
        }
        if definition.tag.trim().is_empty() {
            return Err(Error::InvalidLocale("empty locale tag".to_string()));
        }
        if definition.section_headers.contains_key(&Section::Unsupported) {
            return Err(Error::InvalidLocale(format!(
                "{}: the unsupported sentinel cannot have a header label",
                definition.tag
            )));
        }
        for section in Section::SUPPORTED {
            if !definition.section_headers.contains_key(&section) {
                return Err(Error::InvalidLocale(format!(
                    "{}: missing header label for section {}",
                    definition.tag, section
                )));
            }
        }

        let headers = definition
            .section_headers
            .iter()
            .map(|(section, label)| (label_key(label), *section))
            .collect();
        let unsupported = definition
            .unsupported_sections
            .iter()
            .map(|label| label_key(label))
            .collect();
        let patterns = Patterns::compile(&definition)?;
        let dates = Vocabulary::new(&definition.vocabulary.dates)?;
        let duration = Vocabulary::new(&definition.vocabulary.duration)?;

        Ok(Self {
            definition,
            headers,
            unsupported,
            patterns,
            dates,
            duration,
        })
    }

    /// Parse a locale document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: LocaleDefinition = serde_json::from_str(json)?;
        Self::new(definition)
    }

    /// Load a locale document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load one of the bundled locales by tag.
    pub fn bundled(tag: &str) -> Result<Self> {
        let primary = primary_subtag(tag);
        BUNDLED
            .iter()
            .find(|(bundled_tag, _)| *bundled_tag == primary)
            .map(|(_, json)| Self::from_json(json))
            .unwrap_or_else(|| Err(Error::UnknownLocale(tag.to_string())))
    }

    /// The bundled English locale.
    pub fn english() -> Result<Self> {
        Self::bundled(DEFAULT_LOCALE)
    }

    /// Language tag.
    pub fn tag(&self) -> &str {
        &self.definition.tag
    }

    /// The raw definition this locale was built from.
    pub fn definition(&self) -> &LocaleDefinition {
        &self.definition
    }

    /// Compiled patterns.
    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Whether `text` is the localized "Page" word.
    pub fn is_page_label(&self, text: &str) -> bool {
        label_key(text) == label_key(&self.definition.page)
    }

    /// Section introduced by a header line, if `text` is one.
    pub fn section_for_header(&self, text: &str) -> Option<Section> {
        self.headers.get(&label_key(text)).copied()
    }

    /// Whether `text` is a supported section header.
    pub fn is_section_header(&self, text: &str) -> bool {
        self.section_for_header(text).is_some()
    }

    /// Whether `text` is the header of a section without a dedicated grammar.
    pub fn is_unsupported_section(&self, text: &str) -> bool {
        self.unsupported.contains(&label_key(text))
    }

    /// Label of the recommendations pseudo-section.
    pub fn recommendations_label(&self) -> &str {
        &self.definition.recommendations
    }

    /// Header label of a supported section.
    pub fn header_label(&self, section: Section) -> Option<&str> {
        self.definition
            .section_headers
            .get(&section)
            .map(String::as_str)
    }

    /// Rewrite a localized date (`janeiro de 2014`) with English vocabulary.
    pub fn normalize_date(&self, text: &str) -> String {
        self.dates.apply(text)
    }

    /// Rewrite a localized duration (`2 anos`) with English vocabulary.
    pub fn normalize_duration(&self, text: &str) -> String {
        self.duration.apply(text)
    }
}

/// Comparison key for labels: trimmed and NFC-normalized, so decomposed
/// accents from the extractor still match the table.
pub(crate) fn label_key(text: &str) -> String {
    text.trim().nfc().collect()
}

/// `pt-BR` and `pt_BR` resolve to `pt`.
pub(crate) fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .trim()
        .to_ascii_lowercase()
}
