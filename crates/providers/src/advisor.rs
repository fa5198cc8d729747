//! External chart advisor.
//!
//! The suggestion call never fails from the caller's point of view: a
//! disabled advisor, a timeout, a transport error or a malformed reply all
//! come back as an empty string, which the normalizer maps to its fallback.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::AdvisorSettings;
use tokio::time::timeout;

use crate::ollama::OllamaClient;
use crate::prompts::{analysis_prompt, suggestion_prompt};

#[async_trait]
pub trait ChartAdvisor: Send + Sync {
    /// Raw chart-kind suggestion for the pair of columns. Empty on failure.
    async fn suggest(&self, x: &str, y: &str) -> String;

    /// Free-text reading of the chart for the pair of columns.
    async fn explain(&self, x: &str, y: &str) -> Result<String>;
}

/// Advisor backed by a local Ollama model.
pub struct OllamaAdvisor {
    client: OllamaClient,
    settings: AdvisorSettings,
}

impl OllamaAdvisor {
    pub fn new(settings: AdvisorSettings) -> Self {
        Self {
            client: OllamaClient::from_settings(&settings),
            settings,
        }
    }
}

#[async_trait]
impl ChartAdvisor for OllamaAdvisor {
    async fn suggest(&self, x: &str, y: &str) -> String {
        if !self.settings.enabled {
            return String::new();
        }

        let prompt = suggestion_prompt(x, y);
        let limit = self.settings.suggest_timeout();
        match timeout(limit, self.client.generate(&prompt)).await {
            Ok(Ok(text)) => {
                tracing::debug!(model = %self.client.model(), reply = %text.trim(), "advisor suggestion");
                text.trim().to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "advisor suggestion failed, using fallback");
                String::new()
            }
            Err(_) => {
                tracing::warn!(timeout_secs = limit.as_secs(), "advisor suggestion timed out, using fallback");
                String::new()
            }
        }
    }

    async fn explain(&self, x: &str, y: &str) -> Result<String> {
        if !self.settings.enabled {
            return Err(anyhow!("advisor is disabled"));
        }

        let prompt = analysis_prompt(x, y);
        let limit = self.settings.explain_timeout();
        match timeout(limit, self.client.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!("advisor timed out after {}s", limit.as_secs())),
        }
    }
}

/// Advisor returning preset answers. Used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedAdvisor {
    suggestion: String,
    analysis: Option<String>,
}

impl FixedAdvisor {
    pub fn new(suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: suggestion.into(),
            analysis: None,
        }
    }

    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.analysis = Some(analysis.into());
        self
    }
}

#[async_trait]
impl ChartAdvisor for FixedAdvisor {
    async fn suggest(&self, _x: &str, _y: &str) -> String {
        self.suggestion.clone()
    }

    async fn explain(&self, _x: &str, _y: &str) -> Result<String> {
        self.analysis
            .clone()
            .ok_or_else(|| anyhow!("no analysis available offline"))
    }
}
