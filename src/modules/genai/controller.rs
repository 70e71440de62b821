use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::modules::genai::schema::{GenerateRequest, GenerateResponse, MessageResponse};
use crate::services::error::ServiceError;
use crate::AppState;

fn error_response(e: ServiceError) -> (StatusCode, Json<MessageResponse>) {
    (e.status(), Json(MessageResponse { message: e.to_string() }))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<MessageResponse>)> {
    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse { message: e.to_string() }),
        ));
    }

    let text = state
        .genai
        .generate(&payload.text)
        .await
        .map_err(error_response)?;

    Ok(Json(GenerateResponse { text }))
}
