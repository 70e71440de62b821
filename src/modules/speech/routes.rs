use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::modules::speech::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/text-to-speech", post(controller::text_to_speech))
        .route("/api/speech-to-text", post(controller::speech_to_text))
        // Leave headroom over the audio cap so oversize uploads reach the
        // handler and get a proper error instead of a 413.
        .layer(DefaultBodyLimit::max(crate::MAX_AUDIO_BYTES + 1024 * 1024))
}
