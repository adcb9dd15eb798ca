// GUI configuration module
pub mod theme; // Color palettes and the generated stylesheet

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::DashboardError;
use theme::Theme;

/// Points at a JSON file that replaces the embedded default configuration.
pub const CONFIG_PATH_ENV: &str = "HOME_FINANCES_CONFIG";
/// Overrides `api.base_url` regardless of which configuration file was loaded.
pub const API_URL_ENV: &str = "HOME_FINANCES_API_URL";

// Mirrors the structure of assets/config/default.json
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: Theme,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub transactions_path: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    // The default config is embedded so the binary runs without any files next to it.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: AppConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    // Reads the override environment variables, then defers to `load_with`.
    pub fn load() -> Result<Self, anyhow::Error> {
        let config_path = std::env::var_os(CONFIG_PATH_ENV);
        let api_url = std::env::var(API_URL_ENV).ok();
        Self::load_with(config_path.as_deref().map(Path::new), api_url)
    }

    pub fn load_with(config_path: Option<&Path>, api_url: Option<String>) -> Result<Self, anyhow::Error> {
        let mut config = match config_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration from file.");
                Self::load_from_path(path)?
            }
            None => Self::load_default()?,
        };

        if let Some(url) = api_url {
            tracing::info!(base_url = %url, "API base URL overridden from environment.");
            config.api.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.api.base_url.trim().is_empty() {
            return Err(DashboardError::ConfigError("api.base_url must not be empty".to_string()));
        }
        if self.api.transactions_path.trim().is_empty() {
            return Err(DashboardError::ConfigError(
                "api.transactions_path must not be empty".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(DashboardError::ConfigError("api.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_default() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.theme, Theme::Light);
        assert_eq!(config.api.transactions_path, "transactions");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_with_file_and_url_override() {
        let file = write_config(
            r#"{
                "version": "2.0.0",
                "app": { "title": "Finanças", "theme": "dark", "window_width": 800, "window_height": 600 },
                "api": { "base_url": "http://example.test", "transactions_path": "v1/transactions", "timeout_secs": 3 }
            }"#,
        );
        let config =
            AppConfig::load_with(Some(file.path()), Some("http://override.test:3333".to_string())).unwrap();

        assert_eq!(config.version, "2.0.0");
        assert_eq!(config.app.theme, Theme::Dark);
        assert_eq!(config.api.base_url, "http://override.test:3333");
        assert_eq!(config.api.transactions_path, "v1/transactions");
    }

    #[test]
    fn test_load_with_missing_file() {
        let result = AppConfig::load_with(Some(Path::new("/definitely/not/here.json")), None);
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::load_default().unwrap();
        config.api.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(DashboardError::ConfigError(_))));
    }

    #[test]
    fn test_load_with_rejects_empty_url_override() {
        assert!(AppConfig::load_with(None, Some("  ".to_string())).is_err());
    }
}
