use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "ja"];
pub const API_URL_ENV: &str = "WORDBOOK_API_URL";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    #[serde(default = "default_speech_args")]
    pub speech_args: Vec<String>,
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
    /// Unset means requests never time out on the client side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_speech_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}
fn default_speech_args() -> Vec<String> {
    if cfg!(target_os = "macos") {
        Vec::new()
    } else {
        vec!["-v".to_string(), "en-us".to_string()]
    }
}
fn default_snapshot_dir() -> String {
    dirs::download_dir()
        .or_else(|| dirs::data_dir().map(|d| d.join("wordbook").join("snapshots")))
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            theme: default_theme(),
            language: default_language(),
            speech_command: default_speech_command(),
            speech_args: default_speech_args(),
            snapshot_dir: default_snapshot_dir(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordbook")
            .join("config.toml")
    }

    /// Apply a base URL from the environment (`WORDBOOK_API_URL`). Empty values are ignored.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Reset values the client cannot honour back to their defaults.
    pub fn normalize(&mut self) {
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }
        if self.api_url.trim().is_empty() {
            self.api_url = default_api_url();
        }
        if self.request_timeout_secs == Some(0) {
            self.request_timeout_secs = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.language, "en");
        assert_eq!(config.request_timeout_secs, None);
        assert!(config.request_timeout().is_none());
        assert!(!config.snapshot_dir.is_empty());
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
api_url = "http://wordbook.local:9000"
language = "ja"
request_timeout_secs = 15
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_url, "http://wordbook.local:9000");
        assert_eq!(config.language, "ja");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_config_serde_roundtrip_without_timeout() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        assert!(!serialized.contains("request_timeout_secs"));
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.api_url, deserialized.api_url);
        assert_eq!(config.speech_args, deserialized.speech_args);
    }

    #[test]
    fn test_normalize_zero_timeout_means_none() {
        let mut config = Config {
            request_timeout_secs: Some(0),
            ..Config::default()
        };
        config.normalize();
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default()
            .with_api_url_override(Some(" http://remote:8080 ".to_string()));
        assert_eq!(config.api_url, "http://remote:8080");

        let config = Config::default().with_api_url_override(Some("  ".to_string()));
        assert_eq!(config.api_url, "http://localhost:8000");

        let config = Config::default().with_api_url_override(None);
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_normalize_unknown_language_resets() {
        let mut config = Config::default();
        config.language = "fr".to_string();
        config.normalize();
        assert_eq!(config.language, "en");

        config.language = "ja".to_string();
        config.normalize();
        assert_eq!(config.language, "ja");
    }
}
