//! Parsing options and configuration.

use std::sync::Arc;

use super::lexer::DEFAULT_NEWLINE_GAP;
use crate::error::Result;
use crate::locale::{Locale, DEFAULT_LOCALE};

/// Options for parsing chunk streams into profiles.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Tag of the bundled locale to use when no explicit locale is set
    pub locale_tag: String,

    /// Explicit locale, takes precedence over `locale_tag`
    pub locale: Option<Arc<Locale>>,

    /// Vertical distance above which two chunks are separate paragraphs
    pub newline_gap: f64,

    /// Whether job dates and durations are rewritten with English vocabulary
    pub normalize_vocabulary: bool,

    /// Whether to use parallel processing for multiple documents
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit locale.
    pub fn with_locale(mut self, locale: impl Into<Arc<Locale>>) -> Self {
        let locale = locale.into();
        self.locale_tag = locale.tag().to_string();
        self.locale = Some(locale);
        self
    }

    /// Use a bundled locale by tag (`en`, `pt-BR`, ...).
    pub fn with_locale_tag(mut self, tag: impl Into<String>) -> Self {
        self.locale_tag = tag.into();
        self.locale = None;
        self
    }

    /// Set the paragraph gap.
    pub fn with_newline_gap(mut self, gap: f64) -> Self {
        self.newline_gap = gap;
        self
    }

    /// Enable or disable date and duration normalization.
    pub fn with_vocabulary_normalization(mut self, normalize: bool) -> Self {
        self.normalize_vocabulary = normalize;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The locale these options select.
    pub fn resolve_locale(&self) -> Result<Arc<Locale>> {
        match &self.locale {
            Some(locale) => Ok(Arc::clone(locale)),
            None => Ok(Arc::new(Locale::bundled(&self.locale_tag)?)),
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            locale_tag: DEFAULT_LOCALE.to_string(),
            locale: None,
            newline_gap: DEFAULT_NEWLINE_GAP,
            normalize_vocabulary: true,
            parallel: true,
        }
    }
}
