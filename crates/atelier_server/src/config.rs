//! Gateway configuration from the environment.

use atelier_error::{AtelierResult, ConfigError};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Image model used when `IMAGE_MODEL` is unset or empty.
pub const DEFAULT_IMAGE_MODEL: &str = "sdxl-lightning";
/// Audio model used when `AUDIO_MODEL` is unset or empty.
pub const DEFAULT_AUDIO_MODEL: &str = "tts-en-v1";

/// Settings for the gateway process.
///
/// Reads (each optional):
/// - `PORT` (default: 5000)
/// - `MONGODB_URI` persistent store connection string (no default)
/// - `OLLAMA_HOST` (default: "http://127.0.0.1:11434")
/// - `TEXT_MODEL` (default: "llama3")
/// - `IMAGE_MODEL` (default: "sdxl-lightning")
/// - `AUDIO_MODEL` (default: "tts-en-v1")
/// - `STATIC_DIR` (default: "public")
/// - `UPLOAD_DIR` (default: "uploads")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GatewayConfig {
    /// Listening port
    #[serde(default = "default_port")]
    port: u16,
    /// Persistent store connection string; carried but not used
    #[serde(default, rename = "mongodb_uri")]
    store_uri: Option<String>,
    /// Model runtime base URL
    #[serde(default = "default_ollama_host")]
    ollama_host: String,
    /// Model for chat and summaries
    #[serde(default = "default_text_model")]
    text_model: String,
    /// Model for image synthesis
    #[serde(default)]
    image_model: String,
    /// Model for speech synthesis
    #[serde(default)]
    audio_model: String,
    /// Served directory that also receives generated artifacts
    #[serde(default = "default_static_dir")]
    static_dir: PathBuf,
    /// Where uploads wait for extraction
    #[serde(default = "default_upload_dir")]
    upload_dir: PathBuf,
}

impl GatewayConfig {
    /// Load from the process environment.
    pub fn from_env() -> AtelierResult<Self> {
        Self::from_environment(config::Environment::default())
    }

    /// Load from an explicit environment source.
    #[instrument(skip_all)]
    pub fn from_environment(environment: config::Environment) -> AtelierResult<Self> {
        let settings = config::Config::builder()
            .add_source(environment)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read environment: {}", e)))?;

        let mut parsed: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        if parsed.text_model.trim().is_empty() {
            parsed.text_model = default_text_model();
        }
        if parsed.image_model.trim().is_empty() {
            parsed.image_model = DEFAULT_IMAGE_MODEL.to_string();
        }
        if parsed.audio_model.trim().is_empty() {
            parsed.audio_model = DEFAULT_AUDIO_MODEL.to_string();
        }

        debug!(
            port = parsed.port,
            ollama_host = %parsed.ollama_host,
            text_model = %parsed.text_model,
            image_model = %parsed.image_model,
            audio_model = %parsed.audio_model,
            "Loaded gateway configuration"
        );
        Ok(parsed)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            store_uri: None,
            ollama_host: default_ollama_host(),
            text_model: default_text_model(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            audio_model: DEFAULT_AUDIO_MODEL.to_string(),
            static_dir: default_static_dir(),
            upload_dir: default_upload_dir(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_ollama_host() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_text_model() -> String {
    "llama3".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}
