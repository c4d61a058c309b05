//! Configuration handling for the builder

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address (local PostgREST gateway)
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";

/// Default origin used to build share links
const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8080";

const ENV_BACKEND_URL: &str = "FORM_CANVAS_BACKEND_URL";
const ENV_API_KEY: &str = "FORM_CANVAS_API_KEY";
const ENV_SHARE_ORIGIN: &str = "FORM_CANVAS_SHARE_ORIGIN";

/// User configuration for the builder
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Base URL of the REST backend
    pub backend_url: Option<String>,
    /// API key sent as `apikey` and bearer token
    pub api_key: Option<String>,
    /// Origin prefix of share links
    pub share_origin: Option<String>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formcanvas", "form-canvas")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: BuilderConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override keys from environment variables (empty values are ignored)
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(url) = get(ENV_BACKEND_URL) {
            self.backend_url = Some(url);
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(origin) = get(ENV_SHARE_ORIGIN) {
            self.share_origin = Some(origin);
        }
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn share_origin(&self) -> &str {
        self.share_origin.as_deref().unwrap_or(DEFAULT_SHARE_ORIGIN)
    }
}
