//! Configuration.
//!
//! Loaded from `hackcast.config.json` next to where the command runs;
//! `hackcast init` writes it. Every field has a serde default so a
//! partial file keeps working across versions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

fn default_event_name() -> String {
    "Hackcast Hackathon".to_string()
}

fn default_rubric_path() -> String {
    "rubric.md".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model_fast() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_model_pro() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Gateway settings. The API key is read from `GEMINI_API_KEY` and is
/// never written back to the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(skip, default)]
    pub api_key: String,

    /// Model for categorization and chat summaries
    #[serde(default = "default_model_fast")]
    pub model_fast: String,

    /// Model for rubric pre-scoring
    #[serde(default = "default_model_pro")]
    pub model_pro: String,

    /// API endpoint base
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model_fast: default_model_fast(),
            model_pro: default_model_pro(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Main hackcast configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event name shown in headers
    #[serde(default = "default_event_name")]
    pub event_name: String,

    /// Submission deadline; the browse header shows a countdown to it
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,

    /// Path to the rubric outline document
    #[serde(default = "default_rubric_path")]
    pub rubric_path: String,

    /// AI gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_name: default_event_name(),
            // The demo event ends three days out, at end of day.
            ends_at: Some(default_ends_at(Utc::now())),
            rubric_path: default_rubric_path(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Three days from `now`, at the end of that day
pub fn default_ends_at(now: DateTime<Utc>) -> DateTime<Utc> {
    let target = now + Duration::days(3);
    target
        .date_naive()
        .and_hms_opt(23, 59, 59)
        .map(|naive| naive.and_utc())
        .unwrap_or(target)
}

impl Config {
    /// Load config from a JSON file and pick up the API key from the
    /// environment
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.gateway.api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        Ok(config)
    }

    /// Save config to a file (the API key is skipped)
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config with the API key picked up from the environment
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.gateway.api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        config
    }
}
