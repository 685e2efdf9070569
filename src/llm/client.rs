use super::types::{GenerateRequest, GenerateResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generates a completion for `prompt`, with any echoed prompt removed.
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String>;
}

/// Client for a text-generation server exposing `POST /generate`.
pub struct HttpInferenceClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout_secs: u64,
}

impl HttpInferenceClient {
    /// Fails with [`Error::Config`] when the endpoint or model is missing.
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let base_url = config.endpoint()?;
        let model = config.model()?.to_string();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!("Inference client ready for {} (model: {})", base_url, model);

        Ok(Self {
            client,
            base_url,
            model,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                secs: self.timeout_secs,
            }
        } else if err.is_connect() {
            Error::Connection {
                endpoint: self.base_url.clone(),
            }
        } else {
            Error::Network(err)
        }
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Result<String> {
        let endpoint = format!("{}/generate", self.base_url);

        debug!(
            "Calling inference endpoint {} (model: {}, prompt length: {} chars, max_tokens: {})",
            endpoint,
            self.model,
            prompt.chars().count(),
            max_tokens
        );

        let payload = GenerateRequest {
            prompt: prompt.to_string(),
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!("Inference endpoint returned {}", status);
            return Err(Error::upstream(status.as_u16(), &body));
        }

        let data: GenerateResponse = serde_json::from_str(&body)?;
        let text = data.text.as_deref().map(str::trim).unwrap_or_default();

        if text.is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(strip_prompt_echo(prompt, text))
    }
}

/// Removes the prompt when the server returns it in front of the completion.
///
/// Best effort only. An exact prefix match is tried first; failing that,
/// everything up to the last occurrence of the prompt's final non-blank line
/// is dropped. Anything else comes back as received, trimmed.
pub fn strip_prompt_echo(prompt: &str, reply: &str) -> String {
    let reply = reply.trim();

    if let Some(completion) = reply.strip_prefix(prompt) {
        let completion = completion.trim();
        debug!(
            "Removed prompt from response, completion length: {}",
            completion.chars().count()
        );
        return completion.to_string();
    }

    let last_line = prompt.lines().map(str::trim).filter(|line| !line.is_empty()).last();
    if let Some(last_line) = last_line {
        if let Some(idx) = reply.rfind(last_line) {
            debug!("Removed partial prompt echo ending at its last line");
            return reply[idx + last_line.len()..].trim().to_string();
        }
    }

    debug!("Response doesn't start with prompt, returning full text");
    reply.to_string()
}
