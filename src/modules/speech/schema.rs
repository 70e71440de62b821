use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: Option<String>,
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextToSpeechResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
}

#[derive(Debug, Serialize)]
pub struct SpeechToTextResponse {
    pub transcripts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
