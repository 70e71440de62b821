use axum::{routing::post, Router};

use crate::modules::translation::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/translate", post(controller::translate))
}
