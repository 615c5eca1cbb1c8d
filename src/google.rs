use crate::config::Config;
use crate::i18n::LanguageCode;
use crate::provider::Translator;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Provider failures. Each underlying error is reported once, either as the
/// `source` or not at all, so `{:#}` prints a chain without repeats.
#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("Translation request timed out")]
    Timeout(reqwest::Error),
    #[error("Failed to send translation request")]
    RequestFailed(#[source] reqwest::Error),
    #[error("Google Translate API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to parse translation response")]
    ParseFailed(#[from] serde_json::Error),
    #[error("Malformed translation response: {0}")]
    Malformed(&'static str),
}

impl From<reqwest::Error> for GoogleError {
    fn from(error: reqwest::Error) -> Self {
        // The URL carries the submitted text in its query string
        let error = error.without_url();
        if error.is_timeout() {
            GoogleError::Timeout(error)
        } else {
            GoogleError::RequestFailed(error)
        }
    }
}

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Build a translator with an HTTP client configured from `config`.
    ///
    /// No timeout is applied unless `translate_timeout_secs` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.translate_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::new(client, config.translate_api_url.clone()))
    }

    /// Perform the HTTP call and join the translated segments.
    pub async fn fetch(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, GoogleError> {
        let params = [
            ("client", "gtx"),
            ("dt", "t"),
            ("sl", source),
            ("tl", target),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(GoogleError::Status { status, body });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        parse_translation(&payload)
    }
}

/// Extract the translation from a `translate_a/single` payload.
///
/// The payload is a nested array whose first element lists sentence
/// segments as `[translated, original, ...]`. Segments without a
/// translated string (transliteration rows) are skipped.
fn parse_translation(payload: &Value) -> Result<String, GoogleError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or(GoogleError::Malformed("missing sentence list"))?;

    let translated = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect::<String>();

    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String> {
        debug!(
            "Requesting Google translation {} -> {} ({} chars)",
            source,
            target,
            text.chars().count()
        );
        Ok(self.fetch(text, source.as_str(), target.as_str()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageCatalog;
    use crate::translation::{ErrorKind, TranslationRequestHandler, TranslationResult};
    use std::sync::Arc;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn codes(source: &str, target: &str) -> (LanguageCode, LanguageCode) {
        let catalog = LanguageCatalog::get();
        (
            catalog.code_for(source).unwrap(),
            catalog.code_for(target).unwrap(),
        )
    }

    fn translator_for(server: &MockServer) -> GoogleTranslator {
        GoogleTranslator::new(
            reqwest::Client::new(),
            format!("{}/translate_a/single", server.uri()),
        )
    }

    // ==================== Payload Parsing Tests ====================

    #[test]
    fn test_parse_single_segment() {
        let payload = serde_json::json!([[["bonjour", "hello", null, null, 10]], null, "en"]);
        assert_eq!(parse_translation(&payload).unwrap(), "bonjour");
    }

    #[test]
    fn test_parse_joins_segments() {
        let payload = serde_json::json!([
            [
                ["Bonjour. ", "Hello. ", null, null, 10],
                ["Comment ça va ?", "How are you?", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            parse_translation(&payload).unwrap(),
            "Bonjour. Comment ça va ?"
        );
    }

    #[test]
    fn test_parse_skips_transliteration_rows() {
        let payload = serde_json::json!([
            [["こんにちは", "hello", null, null, 10], [null, null, "Kon'nichiwa"]],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&payload).unwrap(), "こんにちは");
    }

    #[test]
    fn test_parse_empty_segment_list_is_empty_string() {
        let payload = serde_json::json!([[], null, "en"]);
        assert_eq!(parse_translation(&payload).unwrap(), "");
    }

    #[test]
    fn test_parse_missing_sentence_list() {
        let payload = serde_json::json!({"error": "nope"});
        let err = parse_translation(&payload).unwrap_err();
        assert!(matches!(err, GoogleError::Malformed(_)));
        assert!(err.to_string().contains("Malformed"));
    }

    // ==================== HTTP Tests with Wiremock ====================

    #[tokio::test]
    async fn test_translate_success_sends_codes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("client", "gtx"))
            .and(query_param("dt", "t"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "zh-cn"))
            .and(query_param("q", "hello"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([
                    [["你好", "hello", null, null, 10]],
                    null,
                    "en"
                ])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let translator = translator_for(&mock_server);
        let (source, target) = codes("English", "Chinese (Simplified)");
        let result = translator
            .translate("hello", source, target)
            .await
            .expect("Should succeed");

        assert_eq!(result, "你好");
    }

    #[tokio::test]
    async fn test_translate_http_error_mentions_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let translator = translator_for(&mock_server);
        let (source, target) = codes("English", "French");
        let err = translator
            .translate("hello", source, target)
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("429"), "Error should mention status: {}", err);
        assert!(err.contains("Too Many Requests"));
    }

    #[tokio::test]
    async fn test_translate_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
            .mount(&mock_server)
            .await;

        let translator = translator_for(&mock_server);
        let (source, target) = codes("English", "French");
        let err = translator
            .translate("hello", source, target)
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("Failed to parse"), "{}", err);
    }

    #[tokio::test]
    async fn test_translate_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["bonjour", "hello"]]]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let translator =
            GoogleTranslator::new(client, format!("{}/translate_a/single", mock_server.uri()));
        let (source, target) = codes("English", "French");
        let err = translator
            .translate("hello", source, target)
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("timed out"), "{}", err);
    }

    #[tokio::test]
    async fn test_translate_connection_refused() {
        // Nothing listens on port 9 locally
        let translator = GoogleTranslator::new(reqwest::Client::new(), "http://127.0.0.1:9/x");
        let (source, target) = codes("English", "French");
        let err = translator
            .translate("hello", source, target)
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("Failed to send translation request"), "{}", err);
    }

    fn slow_server_translator(server: &MockServer) -> GoogleTranslator {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        GoogleTranslator::new(client, format!("{}/translate_a/single", server.uri()))
    }

    // ==================== Error Message Tests ====================

    #[tokio::test]
    async fn test_timeout_message_is_reported_once_without_input_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([[["bonjour", "hello"]]]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let translator = slow_server_translator(&mock_server);
        let handler = TranslationRequestHandler::new(Arc::new(translator));
        let result = handler.handle("secret text here", "English", "French").await;

        match result {
            TranslationResult::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::ProviderError);
                assert_eq!(message.matches("timed out").count(), 1, "{}", message);
                assert!(!message.contains("secret"), "{}", message);
                assert!(!message.contains(&mock_server.uri()), "{}", message);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_error_message_has_no_repeats_or_url() {
        let translator = GoogleTranslator::new(reqwest::Client::new(), "http://127.0.0.1:9/x");
        let handler = TranslationRequestHandler::new(Arc::new(translator));

        let result = handler.handle("secret text here", "English", "French").await;

        let TranslationResult::Failure { kind, message } = result else {
            panic!("Expected failure");
        };
        assert_eq!(kind, ErrorKind::ProviderError);
        assert_eq!(
            message.matches("error sending request").count(),
            1,
            "{}",
            message
        );
        assert!(!message.contains("secret"), "{}", message);
        assert!(!message.contains("127.0.0.1:9/x"), "{}", message);
    }

    #[test]
    fn test_from_config_builds() {
        let config = Config {
            translate_timeout_secs: Some(5),
            ..Config::default()
        };
        let translator = GoogleTranslator::from_config(&config).expect("Should build");
        assert_eq!(translator.api_url, config.translate_api_url);
        assert_eq!(translator.name(), "google");
    }
}
