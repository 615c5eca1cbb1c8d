//! LanguageCode: the provider-facing token for a catalog language.
//!
//! Codes can only be obtained from the catalog, so any `LanguageCode` held
//! by the rest of the crate is known to be one the provider is offered.

use crate::i18n::LanguageCatalog;
use serde::Serialize;
use std::fmt;

/// A provider-specific language code (e.g., "en", "zh-cn").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode {
    code: &'static str,
}

impl LanguageCode {
    /// Only the catalog hands these out.
    pub(crate) const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Get the raw code sent to the provider.
    pub fn as_str(&self) -> &'static str {
        self.code
    }

    /// Get the display name this code was declared under.
    ///
    /// # Panics
    /// Panics if the code is not in the catalog. This cannot happen for codes
    /// obtained through `LanguageCatalog::code_for`.
    pub fn name(&self) -> &'static str {
        LanguageCatalog::get()
            .name_for(self.code)
            .expect("LanguageCode should always come from the catalog")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
