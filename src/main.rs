use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use tango::config::settings::Settings;
use tango::services::genai::GeminiClient;
use tango::services::storage::StorageClient;
use tango::services::stt::SpeechClient;
use tango::services::translate::TranslateClient;
use tango::services::tts::TtsClient;
use tango::services::vocab::VocabStoreClient;
use tango::{modules, AppState};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();

    let state = AppState {
        stt: Arc::new(SpeechClient::new(settings.google_api_key.clone())),
        tts: Arc::new(TtsClient::new(settings.google_api_key.clone())),
        translator: Arc::new(TranslateClient::new(settings.google_api_key.clone())),
        genai: Arc::new(GeminiClient::new(settings.gemini_api_key.clone())),
        storage: Arc::new(StorageClient::new(
            settings.google_access_token.clone(),
            settings.google_service_account.clone(),
            settings.signed_url_expiry_secs,
        )),
        vocab: Arc::new(VocabStoreClient::new(
            settings.notion_api_key.clone(),
            settings.notion_database_id.clone(),
        )),
        audio_bucket: settings.audio_bucket.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3003".parse::<HeaderValue>()?,
            "http://localhost:3000".parse::<HeaderValue>()?,
        ])
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(health_check))
        .merge(modules::translation::routes::routes())
        .merge(modules::speech::routes::routes())
        .merge(modules::genai::routes::routes())
        .merge(modules::vocabulary::routes::routes())
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", settings.port);
    tracing::info!(project = %settings.google_project_id, %addr, "starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
