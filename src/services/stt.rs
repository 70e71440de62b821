use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;

use crate::services::error::ServiceError;

const LANGUAGE_CODE: &str = "vi-VN";
const SAMPLE_RATE_HZ: u32 = 48_000;

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn recognize(&self, audio: &[u8]) -> Result<Vec<String>, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    transcript: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct SpeechClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SpeechClient {
    pub fn new(api_key: String) -> Self {
        let base_url = env::var("SPEECH_BASE_URL")
            .unwrap_or_else(|_| "https://speech.googleapis.com/v1".to_string());

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Transcriber for SpeechClient {
    async fn recognize(&self, audio: &[u8]) -> Result<Vec<String>, ServiceError> {
        let body = json!({
            "config": {
                "languageCode": LANGUAGE_CODE,
                "sampleRateHertz": SAMPLE_RATE_HZ,
            },
            "audio": { "content": BASE64.encode(audio) },
        });

        let response = self
            .client
            .post(format!("{}/speech:recognize", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(ServiceError::Upstream(error_response.error.message));
            }
            return Err(ServiceError::Upstream(error_text));
        }

        let recognized: RecognizeResponse = response.json().await?;

        // First alternative of each result, in result order.
        Ok(recognized
            .results
            .into_iter()
            .filter_map(|r| r.alternatives.into_iter().next().map(|a| a.transcript))
            .collect())
    }
}
