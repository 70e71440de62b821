use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;

use crate::services::error::ServiceError;

const LANGUAGE_CODE: &str = "vi-VN";
const VOICE_NAME: &str = "vi-VN-Wavenet-A";

#[async_trait]
pub trait Synthesizer: Send + Sync {
    // Returns base64-encoded MP3 bytes, as the capability delivers them.
    async fn synthesize(&self, text: &str) -> Result<String, ServiceError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: Option<String>,
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
pub struct TtsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TtsClient {
    pub fn new(api_key: String) -> Self {
        let base_url = env::var("TTS_BASE_URL")
            .unwrap_or_else(|_| "https://texttospeech.googleapis.com/v1".to_string());

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Synthesizer for TtsClient {
    async fn synthesize(&self, text: &str) -> Result<String, ServiceError> {
        let body = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": LANGUAGE_CODE,
                "name": VOICE_NAME,
                "ssmlGender": "MALE",
            },
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": 1.0,
                "pitch": 0.0,
                "volumeGainDb": 0.0,
            },
        });

        let response = self
            .client
            .post(format!("{}/text:synthesize", self.base_url))
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

        let synthesized: SynthesizeResponse = response.json().await?;

        match synthesized.audio_content {
            Some(audio) if !audio.is_empty() => Ok(audio),
            _ => Err(ServiceError::Upstream(
                "No audio content in response".to_string(),
            )),
        }
    }
}
