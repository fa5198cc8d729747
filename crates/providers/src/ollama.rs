use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::AdvisorSettings;
use std::sync::LazyLock;
use std::time::Duration;

static SHARED_HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
});

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Minimal client for Ollama's one-shot `/api/generate` endpoint.
pub struct OllamaClient {
    http: Client,
    base: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: SHARED_HTTP.clone(),
            base: base.into(),
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &AdvisorSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base.trim_end_matches('/'))
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let req = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        let resp = self
            .http
            .post(self.endpoint())
            .json(&req)
            .send()
            .await
            .with_context(|| format!("ollama request to {} failed", self.base))?;
        if !resp.status().is_success() {
            return Err(anyhow!("ollama error: {}", resp.status()));
        }
        let body: OllamaGenerateResponse = resp
            .json()
            .await
            .context("ollama returned an unexpected body")?;
        Ok(body.response)
    }
}
