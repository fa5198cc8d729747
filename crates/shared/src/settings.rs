//! External advisor configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434".into()
}

fn default_model() -> String {
    "mistral".into()
}

fn default_suggest_timeout() -> u64 {
    20
}

fn default_explain_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorSettings {
    /// When false the advisor is never called and suggestions are empty.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_suggest_timeout")]
    pub suggest_timeout_secs: u64,
    #[serde(default = "default_explain_timeout")]
    pub explain_timeout_secs: u64,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            model: default_model(),
            suggest_timeout_secs: default_suggest_timeout(),
            explain_timeout_secs: default_explain_timeout(),
        }
    }
}

impl AdvisorSettings {
    pub fn suggest_timeout(&self) -> Duration {
        Duration::from_secs(self.suggest_timeout_secs)
    }

    pub fn explain_timeout(&self) -> Duration {
        Duration::from_secs(self.explain_timeout_secs)
    }

    /// Default settings file location in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "ChartAdvisor", "chart_advisor")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Read settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Resolve settings: explicit file, else the default file if present,
    /// else defaults; then environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Apply `OLLAMA_BASE_URL` and `OLLAMA_MODEL` overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(env::var("OLLAMA_BASE_URL").ok(), env::var("OLLAMA_MODEL").ok());
    }

    fn apply_overrides(&mut self, base_url: Option<String>, model: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(base_url = %url, "advisor base url overridden from environment");
            self.base_url = url;
        }
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            tracing::debug!(model = %model, "advisor model overridden from environment");
            self.model = model;
        }
    }
}
