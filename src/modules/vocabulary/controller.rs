use axum::{extract::State, http::StatusCode, Json};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use validator::Validate;

use crate::modules::vocabulary::model::{collect_tags, NewVocabularyRecord, VocabularyRecord};
use crate::modules::vocabulary::schema::{
    CreateVocabularyRequest, CreateVocabularyResponse, MessageResponse, TagsResponse,
    VocabularyItem, VocabularyListResponse,
};
use crate::services::error::ServiceError;
use crate::AppState;

fn error_response(e: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    (e.status(), Json(MessageResponse { message: e.to_string() }))
}

fn to_item(record: VocabularyRecord) -> VocabularyItem {
    VocabularyItem {
        id: record.id,
        name_ja: record.source_term,
        name_vi: record.target_term,
        tags: record.tags,
        audio_url: record.audio.map(|a| a.url),
    }
}

pub async fn list_vocabulary(
    State(state): State<AppState>,
) -> Result<Json<VocabularyListResponse>, (StatusCode, Json<MessageResponse>)> {
    let records = state.vocab.list_all().await.map_err(error_response)?;

    let total_count = records.len();

    Ok(Json(VocabularyListResponse {
        vocabulary_list: records.into_iter().map(to_item).collect(),
        total_count,
    }))
}

pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<Json<TagsResponse>, (StatusCode, Json<MessageResponse>)> {
    let records = state.vocab.list_all().await.map_err(error_response)?;

    let tags = collect_tags(&records);

    Ok(Json(TagsResponse {
        total_count: tags.len(),
        tags,
    }))
}

pub async fn create_vocabulary(
    State(state): State<AppState>,
    Json(payload): Json<CreateVocabularyRequest>,
) -> Result<Json<CreateVocabularyResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    // Older clients sent a single `genre` string; newer ones send `tags`.
    let tags = payload
        .tags
        .unwrap_or_else(|| payload.genre.into_iter().collect());

    let audio = match payload.audio_content {
        Some(encoded) if !encoded.is_empty() => {
            let bytes = BASE64.decode(encoded.as_bytes()).map_err(|_| {
                error_response(ServiceError::InvalidInput(
                    "audio_content must be base64 encoded".to_string(),
                ))
            })?;

            if bytes.len() > crate::MAX_AUDIO_BYTES {
                return Err(error_response(ServiceError::InputTooLarge {
                    size: bytes.len(),
                    max: crate::MAX_AUDIO_BYTES,
                }));
            }

            // Upload first; a create failure below leaves this blob behind.
            let stored = state
                .storage
                .upload_audio(bytes, &state.audio_bucket)
                .await
                .map_err(error_response)?;

            Some(stored)
        }
        _ => None,
    };

    let record = NewVocabularyRecord {
        source_term: payload.name_ja,
        target_term: payload.title,
        tags,
        audio,
    };

    let response = state
        .vocab
        .create_record(&record)
        .await
        .map_err(error_response)?;

    Ok(Json(CreateVocabularyResponse {
        status: "success".to_string(),
        response,
    }))
}
