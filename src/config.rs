use std::env;
use secrecy::SecretString;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

#[derive(Clone, Debug)]
pub struct Config {
    pub google_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            google_api_key: SecretString::from(env::var("GOOGLE_API_KEY").unwrap_or_default()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(20 * 1024 * 1024),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    /// Validate that the model service can actually be reached.
    /// Panics if the API key is missing.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.google_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: GOOGLE_API_KEY is not set! Set GOOGLE_API_KEY environment variable to a Gemini API key."
            );
        }

        if self.gemini_model.trim().is_empty() {
            panic!("FATAL: GEMINI_MODEL is empty! Unset it to use the default model.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            google_api_key: SecretString::from("test_api_key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
            cors_allowed_origin: None,
        }
    }
}
