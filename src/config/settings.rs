use std::env;

// Seven days; earlier deployments used 15 minutes.
const DEFAULT_SIGNED_URL_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub google_project_id: String,
    pub google_api_key: String,
    pub gemini_api_key: String,
    pub google_access_token: String,
    pub google_service_account: String,
    pub audio_bucket: String,
    pub signed_url_expiry_secs: u64,
    pub notion_api_key: String,
    pub notion_database_id: String,
}

impl Settings {
    // Credentials are not checked here; a missing key surfaces as an
    // authentication failure on the first upstream call.
    pub fn from_env() -> Self {
        let google_project_id = env::var("GOOGLE_PROJECT_ID").unwrap_or_default();
        let audio_bucket = env::var("GCS_BUCKET")
            .unwrap_or_else(|_| format!("{google_project_id}-vocab-audio"));

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(6001),
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            gemini_api_key: env::var("GOOGLE_GEMINI_API_KEY").unwrap_or_default(),
            google_access_token: env::var("GOOGLE_ACCESS_TOKEN").unwrap_or_default(),
            google_service_account: env::var("GOOGLE_SERVICE_ACCOUNT").unwrap_or_default(),
            signed_url_expiry_secs: env::var("SIGNED_URL_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SIGNED_URL_EXPIRY_SECS),
            notion_api_key: env::var("NOTION_API_KEY").unwrap_or_default(),
            notion_database_id: env::var("NOTION_DATABASE_ID").unwrap_or_default(),
            google_project_id,
            audio_bucket,
        }
    }
}
