//! HTTP surface: the form page and a JSON API over the request handler.

use crate::i18n::{LanguageCatalog, LanguageEntry};
use crate::session::{SessionGate, SESSION_HEADER};
use crate::translation::{ErrorKind, TranslationRequest, TranslationRequestHandler, TranslationResult};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const BUSY_MESSAGE: &str = "A translation is already in progress for this session.";

#[derive(Clone)]
pub struct AppState {
    pub handler: TranslationRequestHandler,
    pub sessions: SessionGate,
}

impl AppState {
    pub fn new(handler: TranslationRequestHandler) -> Self {
        Self {
            handler,
            sessions: SessionGate::new(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate_form))
        .route("/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Form body posted by the page.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// What to show under the form.
enum Notice<'a> {
    Outcome(&'a TranslationResult),
    Busy,
}

async fn index() -> Html<String> {
    let default_language = LanguageCatalog::get()
        .list_language_names()
        .first()
        .copied()
        .unwrap_or_default();

    let session_id = uuid::Uuid::new_v4().to_string();
    Html(render_page(
        &session_id,
        "",
        default_language,
        default_language,
        None,
    ))
}

async fn translate_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Response {
    let session_id = submission
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let Some(_permit) = state.sessions.try_acquire(&session_id) else {
        let page = render_page(
            &session_id,
            &submission.text,
            &submission.source_language,
            &submission.target_language,
            Some(Notice::Busy),
        );
        return (StatusCode::CONFLICT, Html(page)).into_response();
    };

    let result = state
        .handler
        .handle(
            &submission.text,
            &submission.source_language,
            &submission.target_language,
        )
        .await;

    Html(render_page(
        &session_id,
        &submission.text,
        &submission.source_language,
        &submission.target_language,
        Some(Notice::Outcome(&result)),
    ))
    .into_response()
}

async fn translate_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TranslationRequest>,
) -> Response {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty());

    let _permit = match session_id {
        Some(id) => match state.sessions.try_acquire(id) {
            Some(permit) => Some(permit),
            None => {
                info!("Rejecting overlapping submission for session {}", id);
                return (
                    StatusCode::CONFLICT,
                    Json(json!({"status": "busy", "message": BUSY_MESSAGE})),
                )
                    .into_response();
            }
        },
        None => None,
    };

    let result = state.handler.handle_request(&request).await;
    (status_for(&result), Json(result)).into_response()
}

async fn list_languages() -> Json<Vec<LanguageEntry>> {
    Json(LanguageCatalog::get().entries().to_vec())
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "provider": state.handler.provider_name(),
    }))
}

/// HTTP status for a JSON API result.
pub fn status_for(result: &TranslationResult) -> StatusCode {
    match result.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::ProviderError) => StatusCode::BAD_GATEWAY,
        Some(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Escape text for inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

fn render_options(selected: &str) -> String {
    LanguageCatalog::get()
        .list_language_names()
        .into_iter()
        .map(|name| {
            let marker = if name == selected { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                escape_html(name),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_notice(notice: &Notice<'_>) -> String {
    match notice {
        Notice::Busy => format!(
            "<div class=\"alert warning\">{}</div>",
            escape_html(BUSY_MESSAGE)
        ),
        Notice::Outcome(result) => match result {
            TranslationResult::Success { translated_text } => format!(
                "<div class=\"alert success\">{}</div>\n\
                 <h3>Translated Text</h3>\n\
                 <textarea id=\"output\" rows=\"6\" readonly>\n{}</textarea>",
                escape_html(&result.display_message()),
                escape_html(translated_text)
            ),
            TranslationResult::Failure { kind, .. } => {
                let class = if kind.is_warning() { "warning" } else { "error" };
                format!(
                    "<div class=\"alert {}\">{}</div>",
                    class,
                    escape_html(&result.display_message())
                )
            }
        },
    }
}

fn render_page(
    session_id: &str,
    text: &str,
    source: &str,
    target: &str,
    notice: Option<Notice<'_>>,
) -> String {
    let notice = notice.as_ref().map(render_notice).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Multi-Language Translator</title>
</head>
<body>
<h1>Multi-Language Translator</h1>
<form method="post" action="/translate">
<input type="hidden" name="session_id" value="{session_id}">
<label for="text">Enter Text to Translate</label>
<textarea id="text" name="text" rows="6" placeholder="Type the text you want to translate...">
{text}</textarea>
<label for="source_language">Select Source Language</label>
<select id="source_language" name="source_language">
{source_options}
</select>
<label for="target_language">Select Target Language</label>
<select id="target_language" name="target_language">
{target_options}
</select>
<button type="submit" onclick="this.disabled=true;this.textContent='Translating...';this.form.submit();">Translate</button>
</form>
{notice}
</body>
</html>
"#,
        session_id = escape_html(session_id),
        text = escape_html(text),
        source_options = render_options(source),
        target_options = render_options(target),
        notice = notice,
    )
}
