use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::vocabulary::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/vocabulary-list", get(controller::list_vocabulary))
        .route("/api/tags", get(controller::list_tags))
        .route("/api/create-notion", post(controller::create_vocabulary))
}
