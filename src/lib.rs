use std::sync::Arc;

pub mod config;
pub mod modules;
pub mod services;

use services::genai::TextGenerator;
use services::storage::AudioStore;
use services::stt::Transcriber;
use services::translate::Translator;
use services::tts::Synthesizer;
use services::vocab::VocabStore;

// Hard cap on audio payloads, inbound and uploaded.
pub const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub stt: Arc<dyn Transcriber>,
    pub tts: Arc<dyn Synthesizer>,
    pub translator: Arc<dyn Translator>,
    pub genai: Arc<dyn TextGenerator>,
    pub storage: Arc<dyn AudioStore>,
    pub vocab: Arc<dyn VocabStore>,
    pub audio_bucket: String,
}
