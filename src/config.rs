use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;

/// Default Firestore REST endpoint
pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";

/// Main configuration structure for the admin tools
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase project ID the probe connects to
    pub firebase_project_id: String,
    /// Firebase web API key
    pub firebase_api_key: String,
    /// Firebase application identifier (informational, logged at startup)
    pub firebase_app_id: String,
    /// Firebase auth domain (informational)
    pub firebase_auth_domain: String,
    /// Base URL of the Firestore REST endpoint
    pub firestore_endpoint: String,
}

/// Optional file-based overrides, read from `config/firebase.toml`.
/// Environment variables take precedence over values found here.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    project_id: Option<String>,
    api_key: Option<String>,
    app_id: Option<String>,
    auth_domain: Option<String>,
    endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Load file-based configuration if it exists
        let file_config = match fs::read_to_string("config/firebase.toml") {
            Ok(content) => toml::from_str::<FileConfig>(&content)?,
            Err(_) => FileConfig::default(),
        };

        // Required values: environment first, then the config file
        let firebase_project_id = env::var("FIREBASE_PROJECT_ID")
            .ok()
            .or(file_config.project_id)
            .ok_or_else(|| env_error("FIREBASE_PROJECT_ID"))?;

        let firebase_api_key = env::var("FIREBASE_API_KEY")
            .ok()
            .or(file_config.api_key)
            .ok_or_else(|| env_error("FIREBASE_API_KEY"))?;

        // Optional values with sensible defaults
        let firebase_app_id = env::var("FIREBASE_APP_ID")
            .ok()
            .or(file_config.app_id)
            .unwrap_or_default();

        let firebase_auth_domain = env::var("FIREBASE_AUTH_DOMAIN")
            .ok()
            .or(file_config.auth_domain)
            .unwrap_or_else(|| format!("{}.firebaseapp.com", firebase_project_id));

        let firestore_endpoint = env::var("FIRESTORE_ENDPOINT")
            .ok()
            .or(file_config.endpoint)
            .unwrap_or_else(|| String::from(DEFAULT_FIRESTORE_ENDPOINT));

        Ok(Config {
            firebase_project_id,
            firebase_api_key,
            firebase_app_id,
            firebase_auth_domain,
            firestore_endpoint,
        })
    }
}
