use axum::{extract::State, http::StatusCode, Json};

use crate::modules::translation::schema::{MessageResponse, TranslateRequest, TranslateResponse};
use crate::services::error::ServiceError;
use crate::services::translate::{Translator, TARGET_LANGUAGE};
use crate::services::vocab::VocabStore;
use crate::AppState;

fn error_response(e: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    (e.status(), Json(MessageResponse { message: e.to_string() }))
}

/// Store-first resolution: an existing vocabulary record wins, and the
/// translation capability is only consulted on a miss.
pub async fn resolve_translation(
    store: &dyn VocabStore,
    translator: &dyn Translator,
    text: &str,
) -> Result<TranslateResponse, ServiceError> {
    if text.is_empty() {
        return Err(ServiceError::InvalidInput("Text is required".to_string()));
    }

    if let Some(record) = store.find_by_source_term(text).await? {
        return Ok(TranslateResponse {
            translated_text: record.target_term,
            tags: Some(record.tags),
            name_ja: Some(record.source_term),
        });
    }

    let translated_text = translator.translate(text, TARGET_LANGUAGE).await?;

    Ok(TranslateResponse {
        translated_text,
        tags: None,
        name_ja: None,
    })
}

pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<MessageResponse>)> {
    let resolved =
        resolve_translation(state.vocab.as_ref(), state.translator.as_ref(), &payload.text)
            .await
            .map_err(error_response)?;

    Ok(Json(resolved))
}
