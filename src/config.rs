//! Environment-driven server configuration

use crate::error::{Error, Result};

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;

/// Default Cohere model used for extraction.
const DEFAULT_MODEL: &str = "command-r-plus";

/// Default Tesseract language hint.
const DEFAULT_OCR_LANGUAGE: &str = "spa";

/// Default maximum upload size in bytes (20 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Runtime configuration for the extraction server.
///
/// Loaded once at startup and treated as read-only for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Cohere API key (required)
    pub api_key: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Chat model identifier
    pub model: String,
    /// Language hint passed to the OCR engine
    pub ocr_language: String,
    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails when `COHERE_API_KEY` is absent or empty; everything else has
    /// a default (`PORT`, `COHERE_MODEL`, `OCR_LANGUAGE`,
    /// `MAX_UPLOAD_BYTES`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("COHERE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::MissingEnv {
                name: "COHERE_API_KEY".to_string(),
            })?;

        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let model = lookup("COHERE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let ocr_language =
            lookup("OCR_LANGUAGE").unwrap_or_else(|| DEFAULT_OCR_LANGUAGE.to_string());

        let max_upload_bytes = lookup("MAX_UPLOAD_BYTES")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            api_key,
            port,
            model,
            ocr_language,
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| map.get(name).map(|value| value.to_string())
    }

    #[test]
    fn missing_api_key_fails() {
        let result = ServerConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(Error::MissingEnv { name }) if name == "COHERE_API_KEY"));
    }

    #[test]
    fn empty_api_key_fails() {
        let result = ServerConfig::from_lookup(lookup_from(&[("COHERE_API_KEY", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[("COHERE_API_KEY", "secret")]))
            .expect("config should load");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.port, 5000);
        assert_eq!(config.model, "command-r-plus");
        assert_eq!(config.ocr_language, "spa");
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn environment_overrides_are_honored() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("COHERE_API_KEY", "secret"),
            ("PORT", "8080"),
            ("COHERE_MODEL", "command-r"),
            ("OCR_LANGUAGE", "spa+eng"),
            ("MAX_UPLOAD_BYTES", "1048576"),
        ]))
        .expect("config should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "command-r");
        assert_eq!(config.ocr_language, "spa+eng");
        assert_eq!(config.max_upload_bytes, 1_048_576);
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("COHERE_API_KEY", "secret"),
            ("PORT", "not-a-port"),
        ]))
        .expect("config should load");

        assert_eq!(config.port, 5000);
    }
}
