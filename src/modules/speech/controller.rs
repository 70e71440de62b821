use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::modules::speech::schema::{
    MessageResponse, SpeechToTextResponse, TextToSpeechRequest, TextToSpeechResponse,
};
use crate::services::error::ServiceError;
use crate::AppState;

fn error_response(e: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    (e.status(), Json(MessageResponse { message: e.to_string() }))
}

pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(payload): Json<TextToSpeechRequest>,
) -> Result<Json<TextToSpeechResponse>, (StatusCode, Json<MessageResponse>)> {
    // Web clients send `text`, mobile clients send `translatedText`.
    let text = payload.translated_text.or(payload.text).unwrap_or_default();
    if text.is_empty() {
        return Err(error_response(ServiceError::InvalidInput(
            "Text is required".to_string(),
        )));
    }

    let audio_content = state.tts.synthesize(&text).await.map_err(error_response)?;

    Ok(Json(TextToSpeechResponse { audio_content }))
}

pub async fn speech_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SpeechToTextResponse>, (StatusCode, Json<MessageResponse>)> {
    let mut audio_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: format!("Failed to read multipart: {}", e) }),
        )
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" || name == "audio" {
            let data = field.bytes().await.map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageResponse { message: format!("Failed to read file: {}", e) }),
                )
            })?;
            audio_data = Some(data.to_vec());
        }
    }

    let audio_data = audio_data.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: "No audio file provided".to_string() }),
        )
    })?;

    if audio_data.len() > crate::MAX_AUDIO_BYTES {
        return Err(error_response(ServiceError::InputTooLarge {
            size: audio_data.len(),
            max: crate::MAX_AUDIO_BYTES,
        }));
    }

    let transcripts = state
        .stt
        .recognize(&audio_data)
        .await
        .map_err(error_response)?;

    // An empty result list is a failed transcription, not an empty success.
    if transcripts.is_empty() {
        return Err(error_response(ServiceError::NoTranscription));
    }

    Ok(Json(SpeechToTextResponse { transcripts }))
}
