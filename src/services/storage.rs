use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::services::error::ServiceError;

const STORAGE_HOST: &str = "storage.googleapis.com";
const SIGNING_ALGORITHM: &str = "GOOG4-RSA-SHA256";
const AUDIO_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Clone)]
pub struct StoredAudio {
    pub url: String,
    pub name: String,
}

#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn upload_audio(&self, audio: Vec<u8>, bucket: &str) -> Result<StoredAudio, ServiceError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignBlobResponse {
    signed_blob: String,
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
pub struct StorageClient {
    client: Client,
    access_token: String,
    signer_email: String,
    expiry_secs: u64,
}

impl StorageClient {
    pub fn new(access_token: String, signer_email: String, expiry_secs: u64) -> Self {
        Self {
            client: Client::new(),
            access_token,
            signer_email,
            expiry_secs,
        }
    }

    // Second-granularity timestamps keep names distinct in practice;
    // uniqueness is not guaranteed.
    fn object_name() -> String {
        format!("audio_{}.wav", Utc::now().format("%Y%m%d_%H%M%S"))
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn canonical_request(bucket: &str, object: &str, query: &str) -> String {
        format!(
            "GET\n/{bucket}/{object}\n{query}\nhost:{STORAGE_HOST}\n\nhost\nUNSIGNED-PAYLOAD"
        )
    }

    // V4 signed GET URL. The canonical request is hashed locally; the
    // signature comes from the credentials service, so no private key is
    // held by this process.
    async fn signed_url(&self, bucket: &str, object: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let timestamp = now.format("%Y%m%dT%H%M%SZ").to_string();
        let scope = format!("{}/auto/storage/goog4_request", now.format("%Y%m%d"));
        let credential = format!("{}/{}", self.signer_email, scope)
            .replace('@', "%40")
            .replace('/', "%2F");
        let query = format!(
            "X-Goog-Algorithm={SIGNING_ALGORITHM}&X-Goog-Credential={credential}&X-Goog-Date={timestamp}&X-Goog-Expires={}&X-Goog-SignedHeaders=host",
            self.expiry_secs
        );

        let canonical = Self::canonical_request(bucket, object, &query);
        let digest = Sha256::digest(canonical.as_bytes());
        let string_to_sign = format!(
            "{SIGNING_ALGORITHM}\n{timestamp}\n{scope}\n{}",
            Self::hex(digest.as_slice())
        );

        let response = self
            .client
            .post(format!(
                "https://iamcredentials.googleapis.com/v1/projects/-/serviceAccounts/{}:signBlob",
                self.signer_email
            ))
            .bearer_auth(&self.access_token)
            .json(&json!({ "payload": BASE64.encode(string_to_sign.as_bytes()) }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(ServiceError::Upstream(error_response.error.message));
            }
            return Err(ServiceError::Upstream(error_text));
        }

        let signed: SignBlobResponse = response.json().await?;
        let signature = BASE64
            .decode(signed.signed_blob.as_bytes())
            .map_err(|e| ServiceError::Upstream(format!("Invalid signature encoding: {e}")))?;

        Ok(format!(
            "https://{STORAGE_HOST}/{bucket}/{object}?{query}&X-Goog-Signature={}",
            Self::hex(&signature)
        ))
    }
}

#[async_trait]
impl AudioStore for StorageClient {
    async fn upload_audio(&self, audio: Vec<u8>, bucket: &str) -> Result<StoredAudio, ServiceError> {
        let name = Self::object_name();

        let response = self
            .client
            .post(format!(
                "https://{STORAGE_HOST}/upload/storage/v1/b/{bucket}/o"
            ))
            .query(&[("uploadType", "media"), ("name", name.as_str())])
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .body(audio)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(ServiceError::Upstream(error_response.error.message));
            }
            return Err(ServiceError::Upstream(error_text));
        }

        let url = self.signed_url(bucket, &name).await?;

        Ok(StoredAudio { url, name })
    }
}
