//! Lookup of locales by language tag.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{primary_subtag, Locale, BUNDLED};
use crate::error::{Error, Result};

/// Registry of locales keyed by primary language tag.
///
/// # Example
///
/// ```
/// use linkedin_pdf_to_json::locale::LocaleRegistry;
///
/// let registry = LocaleRegistry::with_defaults().unwrap();
/// assert!(registry.supports("pt-BR"));
/// assert!(!registry.supports("de"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, Arc<Locale>>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every bundled locale.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        for (tag, json) in BUNDLED {
            log::debug!("Loading bundled locale {}", tag);
            registry.register(Locale::from_json(json)?);
        }
        Ok(registry)
    }

    /// Add a locale, replacing any locale with the same tag.
    pub fn register(&mut self, locale: Locale) {
        let tag = primary_subtag(locale.tag());
        if self.locales.insert(tag.clone(), Arc::new(locale)).is_some() {
            log::debug!("Replaced locale {}", tag);
        }
    }

    /// Find a locale by tag (`pt`, `pt-BR`, `PT`).
    pub fn get(&self, tag: &str) -> Result<Arc<Locale>> {
        self.locales
            .get(&primary_subtag(tag))
            .cloned()
            .ok_or_else(|| Error::UnknownLocale(tag.to_string()))
    }

    /// Whether a locale is registered for `tag`.
    pub fn supports(&self, tag: &str) -> bool {
        self.locales.contains_key(&primary_subtag(tag))
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }
}
