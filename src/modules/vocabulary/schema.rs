use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVocabularyRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "name_ja cannot be empty"))]
    pub name_ja: String,
    pub tags: Option<Vec<String>>,
    // Single-tag field sent by older clients.
    pub genre: Option<String>,
    // Base64 audio, as produced by the synthesis endpoint.
    pub audio_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateVocabularyResponse {
    pub status: String,
    pub response: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct VocabularyItem {
    pub id: String,
    pub name_ja: String,
    pub name_vi: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyListResponse {
    pub vocabulary_list: Vec<VocabularyItem>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
