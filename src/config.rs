use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model-serving endpoint for category classification; auto-tagging falls
    /// back to defaults when unset
    #[serde(default)]
    pub classifier_url: Option<String>,

    /// Timeout for fetching item images during auto-tagging
    #[serde(default = "default_image_fetch_timeout_secs")]
    pub image_fetch_timeout_secs: u64,

    /// Timeout for a single classifier call
    #[serde(default = "default_classifier_timeout_secs")]
    pub classifier_timeout_secs: u64,

    /// Send one classification at a time, for model servers that cannot take
    /// concurrent requests
    #[serde(default)]
    pub serialize_classifier: bool,

    /// Origins allowed by CORS, comma separated
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_image_fetch_timeout_secs() -> u64 {
    5
}

fn default_classifier_timeout_secs() -> u64 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5001".to_string(),
        "https://ai-wardrobe-backend-production.up.railway.app".to_string(),
        "https://stylezap-wardrobe-ai.vercel.app".to_string(),
    ]
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn image_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.image_fetch_timeout_secs)
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier_timeout_secs)
    }
}
