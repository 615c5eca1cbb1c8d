//! Language catalog: the fixed table of display names and provider codes.
//!
//! The catalog is a singleton built with `OnceLock` on first access and is
//! immutable thereafter. Declaration order is the order shown in the UI.

use crate::i18n::LanguageCode;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Display name offered in the dropdowns (e.g., "French")
    pub name: &'static str,

    /// Provider code (e.g., "fr")
    pub code: &'static str,
}

/// Returned by `code_for` when a name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language: '{0}'")]
pub struct UnknownLanguageError(pub String);

/// Global language catalog.
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog {
            entries: default_languages()
                .iter()
                .map(|&(name, code)| LanguageEntry { name, code })
                .collect(),
        })
    }

    /// Display names in declaration order.
    pub fn list_language_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Resolve a display name to its provider code.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the name is in the catalog (exact match)
    /// * `Err(UnknownLanguageError)` otherwise
    pub fn code_for(&self, name: &str) -> Result<LanguageCode, UnknownLanguageError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| LanguageCode::new(entry.code))
            .ok_or_else(|| UnknownLanguageError(name.to_string()))
    }

    /// Reverse lookup from provider code to display name.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Supported languages, in the order the dropdowns list them.
///
/// Codes follow the Google Translate conventions (note `zh-cn`).
fn default_languages() -> &'static [(&'static str, &'static str)] {
    &[
        ("English", "en"),
        ("French", "fr"),
        ("Spanish", "es"),
        ("German", "de"),
        ("Italian", "it"),
        ("Portuguese", "pt"),
        ("Russian", "ru"),
        ("Chinese (Simplified)", "zh-cn"),
        ("Japanese", "ja"),
        ("Korean", "ko"),
        ("Arabic", "ar"),
        ("Hindi", "hi"),
        ("Bengali", "bn"),
        ("Urdu", "ur"),
        ("Tamil", "ta"),
        ("Telugu", "te"),
        ("Malayalam", "ml"),
        ("Kannada", "kn"),
        ("Gujarati", "gu"),
        ("Marathi", "mr"),
        ("Punjabi", "pa"),
        ("Thai", "th"),
        ("Vietnamese", "vi"),
        ("Indonesian", "id"),
        ("Turkish", "tr"),
        ("Greek", "el"),
        ("Dutch", "nl"),
        ("Polish", "pl"),
        ("Hebrew", "he"),
        ("Swahili", "sw"),
    ]
}
