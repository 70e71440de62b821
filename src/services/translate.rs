use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;

use crate::services::error::ServiceError;

// Fallback translations always target Vietnamese.
pub const TARGET_LANGUAGE: &str = "vi";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    translated_text: String,
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
pub struct TranslateClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TranslateClient {
    pub fn new(api_key: String) -> Self {
        let base_url = env::var("TRANSLATE_BASE_URL")
            .unwrap_or_else(|_| "https://translation.googleapis.com/language/translate/v2".to_string());

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str, target: &str) -> Result<String, ServiceError> {
        let body = json!({
            "q": text,
            "target": target,
            "format": "text",
        });

        let response = self
            .client
            .post(&self.base_url)
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

        let translated: TranslateResponse = response.json().await?;

        translated
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ServiceError::Upstream("No translations in response".to_string()))
    }
}
