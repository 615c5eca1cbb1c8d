//! Supported languages and their provider codes.
//!
//! # Architecture
//!
//! - `catalog`: Single source of truth for the languages offered in the UI
//! - `language`: Type-safe `LanguageCode` that can only come from the catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::LanguageCatalog;
//!
//! let catalog = LanguageCatalog::get();
//! let french = catalog.code_for("French")?;
//! assert_eq!(french.as_str(), "fr");
//! ```

mod catalog;
mod language;

pub use catalog::{LanguageCatalog, LanguageEntry, UnknownLanguageError};
pub use language::LanguageCode;
