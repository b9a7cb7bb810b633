//! Chat-completion backend abstraction.
//!
//! Uses blocking HTTP via `ureq`; the pipeline runs one request at a time and
//! has no async runtime.

use std::time::Duration;

use serde_json::Value;

use crate::config::ProviderConfig;

/// Errors from chat-completion backend calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("backend returned HTTP status {0}")]
    Status(u16),
    #[error("API error: {0}")]
    Api(String),
    #[error("response parse error: {0}")]
    Parse(String),
    #[error("empty response from backend")]
    EmptyResponse,
}

impl BackendError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status(code) => *code == 429 || *code >= 500,
            Self::Api(_) | Self::Parse(_) | Self::EmptyResponse => false,
        }
    }
}

/// Abstraction over chat-completion APIs.
pub trait ChatBackend {
    /// Send one system turn and one user turn, returning the reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String, BackendError>;

    /// The model name (for display/logging).
    fn model_name(&self) -> &str;
}

/// OpenAI-style chat-completion client for the Volcengine Ark endpoint.
pub struct ArkBackend {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_retries: u32,
    retry_delay: Duration,
    agent: ureq::Agent,
}

impl ArkBackend {
    const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
    const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
            max_retries: config.max_retries,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
            agent: ureq::Agent::new_with_config(
                ureq::config::Config::builder()
                    .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                    .build(),
            ),
        }
    }

    /// Override the base delay between attempts (doubles after each failure).
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Delay before retry number `attempt + 1`, doubling from the base delay
    /// and capped at one minute.
    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(Self::MAX_RETRY_DELAY)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn send(&self, body: &Value) -> Result<String, BackendError> {
        let mut response = self
            .agent
            .post(&self.endpoint())
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => BackendError::Status(code),
                other => BackendError::Http(other.to_string()),
            })?;

        let json: Value = response
            .body_mut()
            .read_json()
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        if let Some(err) = json.get("error") {
            return Err(BackendError::Api(
                err.get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown error")
                    .to_string(),
            ));
        }

        json.get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|c| c.as_str())
            .map(ToString::to_string)
            .ok_or(BackendError::EmptyResponse)
    }
}

impl ChatBackend for ArkBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, BackendError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ]
        });

        let mut attempt = 0;
        loop {
            match self.send(&body) {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_retries + 1,
                        "metadata request failed: {e}"
                    );
                    std::thread::sleep(self.backoff(attempt));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
