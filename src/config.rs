use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_api_key: SecretString,
    pub llm_base_url: String,
    pub llm_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_api_key: SecretString::from(
                env::var("LLM_API_KEY")
                    .or_else(|_| env::var("GOOGLE_API_KEY"))
                    .unwrap_or_default(),
            ),
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    /// Refuses to start a server that cannot reach the model.
    pub fn validate(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "LLM_API_KEY (or GOOGLE_API_KEY) must be set".to_string(),
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(AppError::ValidationError(
                "LLM_MODEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_api_key: SecretString::from("test-api-key".to_string()),
            llm_base_url: "http://127.0.0.1:9/v1".to_string(),
            llm_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.llm_base_url.is_empty());
        assert!(!config.llm_model.is_empty());
        assert!(config.max_upload_bytes > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.llm_model, "test-model");
        assert_eq!(config.web_server_host, "127.0.0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let config = Config {
            llm_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        assert!(matches!(
            config.validate(),
            Err(AppError::ValidationError(_))
        ));
    }
}
