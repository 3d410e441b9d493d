// src/provider/gemini.rs — Google Generative AI (Gemini) backend

use async_trait::async_trait;
use std::time::Duration;

use super::GenerativeModel;
use crate::infra::config::ProviderConfig;
use crate::infra::errors::FusionError;
use crate::util::truncate_str;

pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self {
            api_key,
            model,
            client,
        }
    }

    /// Construct a client from config, reading the key from the configured
    /// environment variable.
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "no API key: set the {} environment variable",
                config.api_key_env
            )
        })?;
        Ok(Self::new(
            api_key,
            config.model.clone(),
            Duration::from_secs(config.timeout_seconds),
        ))
    }

    fn base_url(&self) -> &str {
        "https://generativelanguage.googleapis.com/v1beta"
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": {
                "temperature": 0.9,
                "topP": 1,
                "topK": 1,
                "maxOutputTokens": 4096,
            },
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, FusionError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url(),
            self.model,
            self.api_key,
        );

        // All upstream failure modes collapse to one opaque condition; the
        // detail goes to the log only.
        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("generation request failed: {e}");
                FusionError::Upstream
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "generation upstream returned HTTP {status}: {}",
                truncate_str(&error_body, 500)
            );
            return Err(FusionError::Upstream);
        }

        let resp: serde_json::Value = response.json().await.map_err(|e| {
            tracing::warn!("generation response was not valid JSON: {e}");
            FusionError::Upstream
        })?;

        let parts = resp["candidates"][0]["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        if content.is_empty() {
            tracing::warn!(
                "generation response had no text parts: {}",
                truncate_str(&resp.to_string(), 500)
            );
            return Err(FusionError::Upstream);
        }

        tracing::debug!("generated {} bytes of raw text", content.len());
        Ok(content)
    }
}
