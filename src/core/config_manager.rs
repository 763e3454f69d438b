// src/core/config_manager.rs
//! Configuration loading: optional config.yaml per environment, then env var overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::FsOps;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_PREVIEW_URL: &str = "http://localhost:3000";
const DEFAULT_STATE_DIR: &str = ".portfolio";
const DEFAULT_LOG_FILE: &str = "portfolio-builder.log";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub api_url: String,
    pub preview_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub state_dir: PathBuf,
    pub log_file: PathBuf,
}

/// One environment section of config.yaml. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileSection {
    api_url: Option<String>,
    preview_url: Option<String>,
    state_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: FileSection,
    production: FileSection,
}

impl ConfigManager {
    /// Load configuration from the current directory and process environment
    pub fn load() -> Result<Self> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&base_dir, |key| std::env::var(key).ok())
    }

    /// Load configuration rooted at `base_dir`, reading variables through `env`
    pub fn load_from<F>(base_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("PORTFOLIO_ENV")
            .or_else(|| env("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let section = Self::load_file_section(base_dir, &environment)?;

        let api_url = env("PORTFOLIO_API_URL")
            .or(section.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let preview_url = env("PORTFOLIO_PREVIEW_URL")
            .or(section.preview_url)
            .unwrap_or_else(|| DEFAULT_PREVIEW_URL.to_string());

        let state_dir = env("PORTFOLIO_STATE_DIR")
            .map(PathBuf::from)
            .or(section.state_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));
        let log_file = env("PORTFOLIO_LOG_FILE")
            .map(PathBuf::from)
            .or(section.log_file)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));

        Ok(Self {
            environment,
            service: ServiceConfig {
                api_url: trim_base_url(&api_url),
                preview_url: trim_base_url(&preview_url),
            },
            storage: StorageConfig {
                state_dir: FsOps::normalize_path(base_dir, &state_dir),
                log_file: FsOps::normalize_path(base_dir, &log_file),
            },
        })
    }

    fn load_file_section(base_dir: &Path, environment: &str) -> Result<FileSection> {
        let config_path = base_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(FileSection::default());
        }

        let config_content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Ensure the state directory exists
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.storage.state_dir).await?;
        if let Some(log_parent) = self.storage.log_file.parent() {
            FsOps::ensure_dir_exists(log_parent).await?;
        }
        Ok(())
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
