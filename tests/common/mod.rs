#![allow(dead_code)]

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use tango::modules::vocabulary::model::{NewVocabularyRecord, VocabularyRecord};
use tango::services::error::ServiceError;
use tango::services::genai::TextGenerator;
use tango::services::storage::{AudioStore, StoredAudio};
use tango::services::stt::Transcriber;
use tango::services::translate::Translator;
use tango::services::tts::Synthesizer;
use tango::services::vocab::VocabStore;
use tango::AppState;

#[derive(Default)]
pub struct MockTranscriber {
    pub transcripts: Vec<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn recognize(&self, _audio: &[u8]) -> Result<Vec<String>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.transcripts.clone())
    }
}

pub struct MockSynthesizer {
    pub audio: String,
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self {
            // "mock-audio"
            audio: "bW9jay1hdWRpbw==".to_string(),
        }
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String, ServiceError> {
        Ok(self.audio.clone())
    }
}

#[derive(Default)]
pub struct MockTranslator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, _target: &str) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("translated:{text}"))
    }
}

#[derive(Default)]
pub struct MockGenerator;

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, text: &str) -> Result<String, ServiceError> {
        Ok(format!("reply:{text}"))
    }
}

#[derive(Default)]
pub struct MockAudioStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl AudioStore for MockAudioStore {
    async fn upload_audio(
        &self,
        _audio: Vec<u8>,
        bucket: &str,
    ) -> Result<StoredAudio, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(StoredAudio {
            url: format!("https://storage.example/{bucket}/audio.wav?sig=test"),
            name: "audio_20240101_000000.wav".to_string(),
        })
    }
}

#[derive(Default)]
pub struct MockVocabStore {
    pub records: Vec<VocabularyRecord>,
    pub fail_create: bool,
    pub find_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

#[async_trait]
impl VocabStore for MockVocabStore {
    async fn find_by_source_term(
        &self,
        term: &str,
    ) -> Result<Option<VocabularyRecord>, ServiceError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .iter()
            .find(|r| r.source_term.contains(term))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<VocabularyRecord>, ServiceError> {
        Ok(self.records.clone())
    }

    async fn create_record(&self, _record: &NewVocabularyRecord) -> Result<Value, ServiceError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(ServiceError::Upstream("store rejected the record".to_string()));
        }
        Ok(json!({ "object": "page", "id": "page-created" }))
    }
}

pub fn record(id: &str, source: &str, target: &str, tags: &[&str]) -> VocabularyRecord {
    VocabularyRecord {
        id: id.to_string(),
        source_term: source.to_string(),
        target_term: target.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        audio: None,
    }
}

#[derive(Default)]
pub struct TestBackend {
    pub stt: Arc<MockTranscriber>,
    pub tts: Arc<MockSynthesizer>,
    pub translator: Arc<MockTranslator>,
    pub genai: Arc<MockGenerator>,
    pub storage: Arc<MockAudioStore>,
    pub vocab: Arc<MockVocabStore>,
}

impl TestBackend {
    pub fn state(&self) -> AppState {
        AppState {
            stt: self.stt.clone(),
            tts: self.tts.clone(),
            translator: self.translator.clone(),
            genai: self.genai.clone(),
            storage: self.storage.clone(),
            vocab: self.vocab.clone(),
            audio_bucket: "test-bucket".to_string(),
        }
    }
}
