//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader
//!
//! Manages the user-editable settings of the prompt browser. Settings are
//! stored as TOML at the platform config path resolved with the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! let source = &config.catalog_source;
//! ```

use std::path::{Path, PathBuf};

use clipr::ClipboardConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;
use crate::logging::LoggerConfig;
use crate::operators::catalog_loader::CatalogSource;

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,
}

/// Search behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this never search
    pub min_query_chars: usize,

    /// Preview content longer than this is cut and suffixed with "..."
    pub preview_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            preview_chars: 150,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local path or http(s) URL of the prompt document
    pub catalog_source: CatalogSource,

    pub theme: Theme,

    pub search: SearchConfig,

    pub clipboard: ClipboardConfig,

    pub logging: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_source: CatalogSource::default(),
            theme: Theme::Default,
            search: SearchConfig::default(),
            clipboard: ClipboardConfig::default(),
            logging: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from the platform config dir, creating it with defaults
    /// when missing.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/PromptDeck/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads config from an explicit path, writing defaults there if absent.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if TokioFs::try_exists(path).await.unwrap_or(false) {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })?;
            let cfg: Self = toml::from_str(&text)?;
            cfg.clipboard
                .validate()
                .map_err(|e| AppError::Other(e.to_string()))?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    /// Writes the config as TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        let io_err = |source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await.map_err(io_err)?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "promptdeck", "PromptDeck")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".into()))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.search.preview_chars, 150);
        assert_eq!(config.catalog_source, CatalogSource::default());
    }

    #[tokio::test]
    async fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            "catalog_source = \"https://example.com/prompts.json\"\n\n[clipboard]\nfeedback_duration = \"3s\"\n",
        )
        .await
        .unwrap();

        let config = Config::load_from(&path).await.unwrap();

        assert_eq!(
            config.catalog_source,
            CatalogSource::Url("https://example.com/prompts.json".into())
        );
        assert_eq!(config.clipboard.feedback_duration, Duration::from_secs(3));
        assert_eq!(config.theme, Theme::Default);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "theme = [").await.unwrap();

        assert!(matches!(
            Config::load_from(&path).await,
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.theme = Theme::Dark;

        config.save_to(&path).await.unwrap();
        let loaded = Config::load_from(&path).await.unwrap();

        assert_eq!(loaded.theme, Theme::Dark);
    }
}
