//! The boundary to the external translation service.

use crate::i18n::LanguageCode;
use anyhow::Result;
use async_trait::async_trait;

/// A machine translation backend.
///
/// Implementations perform exactly one outbound call per `translate`
/// invocation. Any failure (network, bad status, malformed payload,
/// unsupported pair, timeout) is reported through the error; callers only
/// ever see its message.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Short identifier used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// Translate `text` from `source` to `target`.
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String>;
}
