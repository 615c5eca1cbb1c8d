use crate::i18n::LanguageCatalog;
use crate::provider::Translator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text to translate!";
pub const SAME_LANGUAGE_MESSAGE: &str = "Source and Target languages cannot be the same.";
pub const SUCCESS_MESSAGE: &str = "Translation Successful!";

/// Why a submission did not produce a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input text is blank or whitespace-only
    EmptyInput,
    /// Source and target selections are identical
    SameLanguage,
    /// A language name outside the catalog (API/CLI callers only)
    UnknownLanguage,
    /// The provider call failed for any reason
    ProviderError,
}

impl ErrorKind {
    /// Whether the UI shows this as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorKind::SameLanguage)
    }

    /// Whether the provider was never contacted for this failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::ProviderError)
    }
}

/// One user submission, with languages given by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Outcome of a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TranslationResult {
    Success { translated_text: String },
    Failure { kind: ErrorKind, message: String },
}

impl TranslationResult {
    fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        TranslationResult::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }

    pub fn translated_text(&self) -> Option<&str> {
        match self {
            TranslationResult::Success { translated_text } => Some(translated_text),
            TranslationResult::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            TranslationResult::Success { .. } => None,
            TranslationResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Status line shown to the user.
    ///
    /// Provider failures get their message appended to a fixed prefix;
    /// validation failures show their message as is.
    pub fn display_message(&self) -> String {
        match self {
            TranslationResult::Success { .. } => SUCCESS_MESSAGE.to_string(),
            TranslationResult::Failure {
                kind: ErrorKind::ProviderError,
                message,
            } => format!("An error occurred during translation: {}", message),
            TranslationResult::Failure { message, .. } => message.clone(),
        }
    }
}

/// Validates submissions and forwards valid ones to the provider.
///
/// Stateless between calls; clone it freely to share one provider.
#[derive(Clone)]
pub struct TranslationRequestHandler {
    provider: Arc<dyn Translator>,
    catalog: &'static LanguageCatalog,
}

impl TranslationRequestHandler {
    pub fn new(provider: Arc<dyn Translator>) -> Self {
        Self {
            provider,
            catalog: LanguageCatalog::get(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Validate and execute one translation.
    ///
    /// Validation runs before any network activity: blank text, identical
    /// languages and unknown names return without calling the provider.
    /// Otherwise exactly one provider call is made, with the text forwarded
    /// as entered. Provider output is returned untouched.
    pub async fn handle(
        &self,
        text: &str,
        source_name: &str,
        target_name: &str,
    ) -> TranslationResult {
        if text.trim().is_empty() {
            debug!("Rejecting submission: empty input");
            return TranslationResult::failure(ErrorKind::EmptyInput, EMPTY_INPUT_MESSAGE);
        }

        if source_name == target_name {
            debug!("Rejecting submission: source and target are both {}", source_name);
            return TranslationResult::failure(ErrorKind::SameLanguage, SAME_LANGUAGE_MESSAGE);
        }

        let (source, target) = match (
            self.catalog.code_for(source_name),
            self.catalog.code_for(target_name),
        ) {
            (Ok(source), Ok(target)) => (source, target),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Rejecting submission: {}", e);
                return TranslationResult::failure(ErrorKind::UnknownLanguage, e.to_string());
            }
        };

        info!(
            "Translating {} chars {} -> {} via {}",
            text.chars().count(),
            source,
            target,
            self.provider.name()
        );

        match self.provider.translate(text, source, target).await {
            Ok(translated_text) => TranslationResult::Success { translated_text },
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("Translation {} -> {} failed: {}", source, target, message);
                TranslationResult::failure(ErrorKind::ProviderError, message)
            }
        }
    }

    pub async fn handle_request(&self, request: &TranslationRequest) -> TranslationResult {
        self.handle(
            &request.text,
            &request.source_language,
            &request.target_language,
        )
        .await
    }
}
