use axum::{routing::post, Router};

use crate::modules::genai::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/gemini", post(controller::generate))
}
