use serde_json::Value;
use std::collections::BTreeSet;

use crate::services::storage::StoredAudio;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioRef {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyRecord {
    pub id: String,
    pub source_term: String,
    pub target_term: String,
    pub tags: Vec<String>,
    pub audio: Option<AudioRef>,
}

impl VocabularyRecord {
    // Lenient adapter from the store's raw page shape. A record missing a
    // usable id, source term, or target term yields None; callers skip it
    // instead of failing the whole listing.
    pub fn from_raw(page: &Value) -> Option<Self> {
        let id = page.get("id")?.as_str()?.to_string();
        let properties = page.get("properties")?;

        let source_term = properties
            .pointer("/name_ja/rich_text/0/text/content")?
            .as_str()?
            .to_string();
        let target_term = properties
            .pointer("/name_vi/title/0/text/content")?
            .as_str()?
            .to_string();

        Some(Self {
            id,
            source_term,
            target_term,
            tags: raw_tags(properties),
            audio: raw_audio(properties),
        })
    }
}

// The tag property has carried two shapes: a multi-select array and a
// single select value. Both normalize to a plain list.
fn raw_tags(properties: &Value) -> Vec<String> {
    if let Some(items) = properties
        .pointer("/tag/multi_select")
        .and_then(Value::as_array)
    {
        return items
            .iter()
            .filter_map(|item| item.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
    }

    properties
        .pointer("/tag/select/name")
        .and_then(Value::as_str)
        .map(|name| vec![name.to_string()])
        .unwrap_or_default()
}

fn raw_audio(properties: &Value) -> Option<AudioRef> {
    let file = properties.pointer("/audio/files/0")?;
    let url = file
        .pointer("/external/url")
        .or_else(|| file.pointer("/file/url"))?
        .as_str()?
        .to_string();
    let name = file
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(AudioRef { url, name })
}

// Listing policy: a malformed record is skipped and logged, never fatal to
// the rest of the listing.
pub fn normalize_records(raw: &[Value]) -> Vec<VocabularyRecord> {
    let mut records = Vec::with_capacity(raw.len());
    for page in raw {
        match VocabularyRecord::from_raw(page) {
            Some(record) => records.push(record),
            None => tracing::warn!("skipping malformed vocabulary record"),
        }
    }
    records
}

#[derive(Debug, Clone)]
pub struct NewVocabularyRecord {
    pub source_term: String,
    pub target_term: String,
    pub tags: Vec<String>,
    pub audio: Option<StoredAudio>,
}

// Union of all tags across records, deduplicated and lexicographically
// ordered. Computed per request, never stored.
pub fn collect_tags(records: &[VocabularyRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(id: &str, name_ja: &str, name_vi: &str) -> Value {
        json!({
            "id": id,
            "properties": {
                "name_ja": { "rich_text": [ { "text": { "content": name_ja } } ] },
                "name_vi": { "title": [ { "text": { "content": name_vi } } ] },
                "tag": { "multi_select": [ { "name": "food" }, { "name": "drink" } ] },
            }
        })
    }

    fn record(tags: &[&str]) -> VocabularyRecord {
        VocabularyRecord {
            id: "page-1".to_string(),
            source_term: "りんご".to_string(),
            target_term: "táo".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            audio: None,
        }
    }

    #[test]
    fn from_raw_normalizes_a_well_formed_page() {
        let record = VocabularyRecord::from_raw(&page("abc-123", "りんご", "táo")).unwrap();

        assert_eq!(record.id, "abc-123");
        assert_eq!(record.source_term, "りんご");
        assert_eq!(record.target_term, "táo");
        assert_eq!(record.tags, vec!["food", "drink"]);
        assert!(record.audio.is_none());
    }

    #[test]
    fn from_raw_skips_page_missing_source_term() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"]["name_ja"] = json!({ "rich_text": [] });

        assert!(VocabularyRecord::from_raw(&raw).is_none());
    }

    #[test]
    fn from_raw_skips_page_missing_target_term() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"].as_object_mut().unwrap().remove("name_vi");

        assert!(VocabularyRecord::from_raw(&raw).is_none());
    }

    #[test]
    fn from_raw_accepts_single_select_tag_shape() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"]["tag"] = json!({ "select": { "name": "food" } });

        let record = VocabularyRecord::from_raw(&raw).unwrap();
        assert_eq!(record.tags, vec!["food"]);
    }

    #[test]
    fn from_raw_tolerates_missing_tag_property() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"].as_object_mut().unwrap().remove("tag");

        let record = VocabularyRecord::from_raw(&raw).unwrap();
        assert!(record.tags.is_empty());
    }

    #[test]
    fn from_raw_reads_external_audio_reference() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"]["audio"] = json!({
            "files": [
                {
                    "name": "audio_20240101_000000.wav",
                    "external": { "url": "https://storage.example/audio.wav" }
                }
            ]
        });

        let record = VocabularyRecord::from_raw(&raw).unwrap();
        let audio = record.audio.unwrap();
        assert_eq!(audio.url, "https://storage.example/audio.wav");
        assert_eq!(audio.name, "audio_20240101_000000.wav");
    }

    #[test]
    fn from_raw_reads_hosted_audio_reference() {
        let mut raw = page("abc-123", "りんご", "táo");
        raw["properties"]["audio"] = json!({
            "files": [
                { "name": "clip.wav", "file": { "url": "https://files.example/clip.wav" } }
            ]
        });

        let record = VocabularyRecord::from_raw(&raw).unwrap();
        assert_eq!(record.audio.unwrap().url, "https://files.example/clip.wav");
    }

    #[test]
    fn normalize_records_keeps_only_well_formed_entries() {
        let malformed = json!({
            "id": "page-2",
            "properties": {
                "name_vi": { "title": [ { "text": { "content": "nước" } } ] }
            }
        });
        let raw = vec![malformed, page("page-1", "りんご", "táo")];

        let records = normalize_records(&raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "page-1");
    }

    #[test]
    fn collect_tags_deduplicates_and_sorts() {
        let records = vec![record(&["food", "drink"]), record(&["drink"]), record(&[])];

        assert_eq!(collect_tags(&records), vec!["drink", "food"]);
    }

    #[test]
    fn collect_tags_of_nothing_is_empty() {
        assert!(collect_tags(&[]).is_empty());
    }
}
