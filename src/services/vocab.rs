use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;

use crate::modules::vocabulary::model::{normalize_records, NewVocabularyRecord, VocabularyRecord};
use crate::services::error::ServiceError;

const STORE_VERSION: &str = "2022-06-28";
const LIST_PAGE_SIZE: u32 = 100;

#[async_trait]
pub trait VocabStore: Send + Sync {
    async fn find_by_source_term(
        &self,
        term: &str,
    ) -> Result<Option<VocabularyRecord>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<VocabularyRecord>, ServiceError>;
    async fn create_record(&self, record: &NewVocabularyRecord) -> Result<Value, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct StoreErrorResponse {
    message: String,
}

#[derive(Clone)]
pub struct VocabStoreClient {
    client: Client,
    base_url: String,
    api_key: String,
    database_id: String,
}

impl VocabStoreClient {
    pub fn new(api_key: String, database_id: String) -> Self {
        let base_url = env::var("NOTION_BASE_URL")
            .unwrap_or_else(|_| "https://api.notion.com/v1".to_string());

        Self {
            client: Client::new(),
            base_url,
            api_key,
            database_id,
        }
    }

    async fn post_json(&self, url: String, body: Value) -> Result<reqwest::Response, ServiceError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", STORE_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(store_error) = serde_json::from_str::<StoreErrorResponse>(&error_text) {
                return Err(ServiceError::Upstream(store_error.message));
            }
            return Err(ServiceError::Upstream(error_text));
        }

        Ok(response)
    }

    async fn query(&self, body: Value) -> Result<Vec<Value>, ServiceError> {
        let response = self
            .post_json(
                format!("{}/databases/{}/query", self.base_url, self.database_id),
                body,
            )
            .await?;

        let parsed: QueryResponse = response.json().await?;
        Ok(parsed.results)
    }
}

#[async_trait]
impl VocabStore for VocabStoreClient {
    async fn find_by_source_term(
        &self,
        term: &str,
    ) -> Result<Option<VocabularyRecord>, ServiceError> {
        let results = self
            .query(json!({
                "filter": {
                    "property": "name_ja",
                    "rich_text": { "contains": term }
                }
            }))
            .await?;

        // First match in the store's native ordering wins.
        Ok(results.iter().find_map(VocabularyRecord::from_raw))
    }

    async fn list_all(&self) -> Result<Vec<VocabularyRecord>, ServiceError> {
        let results = self
            .query(json!({
                "sorts": [ { "property": "name_ja", "direction": "ascending" } ],
                "page_size": LIST_PAGE_SIZE
            }))
            .await?;

        Ok(normalize_records(&results))
    }

    async fn create_record(&self, record: &NewVocabularyRecord) -> Result<Value, ServiceError> {
        let mut properties = json!({
            "name_vi": {
                "title": [ { "text": { "content": record.target_term } } ]
            },
            "name_ja": {
                "rich_text": [ { "text": { "content": record.source_term } } ]
            },
            "tag": {
                "multi_select": record
                    .tags
                    .iter()
                    .map(|tag| json!({ "name": tag }))
                    .collect::<Vec<_>>()
            },
        });

        if let Some(audio) = &record.audio {
            properties["audio"] = json!({
                "files": [
                    { "name": audio.name, "external": { "url": audio.url } }
                ]
            });
        }

        let response = self
            .post_json(
                format!("{}/pages", self.base_url),
                json!({
                    "parent": { "database_id": self.database_id },
                    "properties": properties,
                }),
            )
            .await?;

        Ok(response.json().await?)
    }
}
