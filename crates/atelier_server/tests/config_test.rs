//! Tests for environment-driven gateway configuration.

use atelier_error::AtelierErrorKind;
use atelier_server::{DEFAULT_AUDIO_MODEL, DEFAULT_IMAGE_MODEL, GatewayConfig};
use std::path::Path;

fn environment(vars: &[(&str, &str)]) -> config::Environment {
    let mut map = config::Map::new();
    for (key, value) in vars {
        map.insert(key.to_string(), value.to_string());
    }
    config::Environment::default().source(Some(map))
}

#[test]
fn test_defaults_when_unset() {
    let config = GatewayConfig::from_environment(environment(&[])).unwrap();

    assert_eq!(config, GatewayConfig::default());
    assert_eq!(*config.port(), 5000);
    assert_eq!(config.ollama_host(), "http://127.0.0.1:11434");
    assert_eq!(config.text_model(), "llama3");
    assert_eq!(config.image_model(), DEFAULT_IMAGE_MODEL);
    assert_eq!(config.audio_model(), DEFAULT_AUDIO_MODEL);
    assert_eq!(config.static_dir(), Path::new("public"));
    assert_eq!(config.upload_dir(), Path::new("uploads"));
    assert!(config.store_uri().is_none());
}

#[test]
fn test_reads_variables() {
    let config = GatewayConfig::from_environment(environment(&[
        ("PORT", "8080"),
        ("MONGODB_URI", "mongodb://localhost:27017/atelier"),
        ("OLLAMA_HOST", "http://gpu-box:11434"),
        ("TEXT_MODEL", "mistral"),
        ("IMAGE_MODEL", "flux"),
        ("STATIC_DIR", "/srv/www"),
    ]))
    .unwrap();

    assert_eq!(*config.port(), 8080);
    assert_eq!(
        config.store_uri().as_deref(),
        Some("mongodb://localhost:27017/atelier")
    );
    assert_eq!(config.ollama_host(), "http://gpu-box:11434");
    assert_eq!(config.text_model(), "mistral");
    assert_eq!(config.image_model(), "flux");
    assert_eq!(config.audio_model(), DEFAULT_AUDIO_MODEL);
    assert_eq!(config.static_dir(), Path::new("/srv/www"));
}

#[test]
fn test_empty_model_names_fall_back() {
    let config = GatewayConfig::from_environment(environment(&[
        ("IMAGE_MODEL", ""),
        ("AUDIO_MODEL", "  "),
    ]))
    .unwrap();

    assert_eq!(config.image_model(), DEFAULT_IMAGE_MODEL);
    assert_eq!(config.audio_model(), DEFAULT_AUDIO_MODEL);
}

#[test]
fn test_invalid_port_is_config_error() {
    let err = GatewayConfig::from_environment(environment(&[("PORT", "fivethousand")]))
        .unwrap_err();
    assert!(matches!(err.kind(), AtelierErrorKind::Config(_)));
    assert!(err.public_message().starts_with("Invalid configuration"));
}
