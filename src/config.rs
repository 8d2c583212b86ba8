use crate::session::Language;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding `api.base_url`
pub const BASE_URL_ENV: &str = "FLATMATE_API_BASE_URL";

/// A validation error in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Where the session blob lives
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Language of a brand-new session; kept as text so `validate` can
    /// report a bad value instead of failing the whole parse.
    #[serde(default)]
    pub default_language: Option<String>,
}

impl Config {
    /// Load configuration from default paths
    /// Priority: local (.flatmate/config.local.toml) > project (.flatmate/config.toml)
    /// > user (~/.flatmate/config.toml), then the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".flatmate").join("config.toml");
            if user_config.exists() {
                config.merge(Self::load_from(&user_config)?);
            }
        }

        let project_config = Path::new(".flatmate").join("config.toml");
        if project_config.exists() {
            config.merge(Self::load_from(&project_config)?);
        }

        let local_config = Path::new(".flatmate").join("config.local.toml");
        if local_config.exists() {
            config.merge(Self::load_from(&local_config)?);
        }

        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Merge another config into this one (other takes priority where set)
    pub fn merge(&mut self, other: Config) {
        if other.api.base_url.is_some() {
            self.api.base_url = other.api.base_url;
        }
        if other.storage.dir.is_some() {
            self.storage.dir = other.storage.dir;
        }
        if other.default_language.is_some() {
            self.default_language = other.default_language;
        }
    }

    /// Apply environment overrides on top of file settings
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = Some(url);
            }
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Directory holding the session blob: configured, else ~/.flatmate,
    /// else ./.flatmate
    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.dir {
            return dir.clone();
        }
        dirs::home_dir()
            .map(|home| home.join(".flatmate"))
            .unwrap_or_else(|| PathBuf::from(".flatmate"))
    }

    /// Falls back to English; `validate` reports unknown codes.
    pub fn default_language(&self) -> Language {
        self.default_language
            .as_deref()
            .and_then(|code| Language::parse(code).ok())
            .unwrap_or_default()
    }

    /// Validate configuration and return any errors found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let url = self.base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ValidationError {
                field: "api.base_url".to_string(),
                message: format!("Must start with http:// or https://, got '{}'", url),
            });
        }

        if let Some(code) = &self.default_language {
            if Language::parse(code).is_err() {
                errors.push(ValidationError {
                    field: "default_language".to_string(),
                    message: format!("Unknown language '{}', expected en, fr or ar", code),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.default_language(), Language::En);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_language = "ar"

[api]
base_url = "https://api.flatmate.example"

[storage]
dir = "/tmp/flatmate-test"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url(), "https://api.flatmate.example");
        assert_eq!(config.default_language(), Language::Ar);
        assert_eq!(config.storage_dir(), PathBuf::from("/tmp/flatmate-test"));
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let mut config = Config {
            api: ApiConfig {
                base_url: Some("http://user.example".to_string()),
            },
            storage: StorageConfig {
                dir: Some(PathBuf::from("/user")),
            },
            default_language: Some("fr".to_string()),
        };
        let project = Config {
            api: ApiConfig {
                base_url: Some("http://project.example".to_string()),
            },
            ..Config::default()
        };

        config.merge(project);
        assert_eq!(config.base_url(), "http://project.example");
        assert_eq!(config.storage_dir(), PathBuf::from("/user"));
        assert_eq!(config.default_language(), Language::Fr);
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = Some("localhost:8080".to_string());
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].field.contains("base_url"));
    }

    #[test]
    fn test_validate_unknown_language() {
        let mut config = Config::default();
        config.default_language = Some("de".to_string());
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "default_language");
        assert_eq!(config.default_language(), Language::En);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
