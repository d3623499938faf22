//! Model provider: the single suspension point in a cook run.
//!
//! `Provider` abstracts the `generate(prompt) -> text` call so the
//! orchestrator can be driven without a network. `Gemini` is the real
//! implementation. The retry policy lives here too and is applied by
//! the orchestrator around the call — nowhere else blocks or retries.

use std::{thread, time::Duration};

use log::warn;
use serde_json::{Value, json};

/// How a model call failed, split by whether a retry can help.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Provider-side throttle. Retryable.
    #[error("rate limited by the model provider")]
    RateLimited,

    /// A 4xx/5xx the provider explained. Terminal for this call.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Network-level failure. Retryable.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with no usable text.
    #[error("model returned an empty response")]
    Empty,
}

impl ModelError {
    /// Whether another attempt could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport(_))
    }
}

/// An opaque text-generation collaborator.
pub trait Provider {
    /// One synchronous generate call. `creativity` maps to the
    /// provider's temperature-like parameter.
    fn generate(&self, prompt: &str, creativity: f64) -> Result<String, ModelError>;
}

/// Bounded exponential backoff around the provider call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Call `generate` until it succeeds, fails terminally, or the
    /// attempt budget is spent. Sleeps `base_delay * 2^attempt` before
    /// each retry.
    pub fn generate(
        &self,
        provider: &dyn Provider,
        prompt: &str,
        creativity: f64,
    ) -> Result<String, ModelError> {
        let mut attempt = 0;
        loop {
            match provider.generate(prompt, creativity) {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt + 1 < self.max_attempts => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    warn!(
                        "model call failed (attempt {}/{}): {e}; retrying in {delay:?}",
                        attempt + 1,
                        self.max_attempts
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Request timeout. The orchestrator must never hang on the model call.
const TIMEOUT: Duration = Duration::from_secs(15);

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini `generateContent` over blocking HTTP.
pub struct Gemini {
    client: reqwest::blocking::Client,
    model: String,
    api_key: String,
}

impl Gemini {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ModelError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| ModelError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

impl Provider for Gemini {
    fn generate(&self, prompt: &str, creativity: f64) -> Result<String, ModelError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let payload = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"temperature": creativity},
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        if status.as_u16() == 429 {
            return Err(ModelError::RateLimited);
        }
        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error.")
                .to_string();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|text| !text.is_empty())
            .ok_or(ModelError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    /// Fails `failures` times, then succeeds.
    struct FlakyProvider {
        failures: u32,
        calls: Cell<u32>,
        error: fn() -> ModelError,
    }

    impl Provider for FlakyProvider {
        fn generate(&self, _prompt: &str, _creativity: f64) -> Result<String, ModelError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call < self.failures {
                Err((self.error)())
            } else {
                Ok("recipe text".to_string())
            }
        }
    }

    fn instant_retry(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::ZERO,
        }
    }

    #[test]
    fn transport_errors_are_retried() {
        let provider = FlakyProvider {
            failures: 2,
            calls: Cell::new(0),
            error: || ModelError::Transport("connection reset".into()),
        };

        let text = instant_retry(3).generate(&provider, "p", 0.8).unwrap();
        assert_eq!(text, "recipe text");
        assert_eq!(provider.calls.get(), 3);
    }

    #[test]
    fn retries_stop_at_the_attempt_bound() {
        let provider = FlakyProvider {
            failures: 10,
            calls: Cell::new(0),
            error: || ModelError::Transport("connection reset".into()),
        };

        let err = instant_retry(3).generate(&provider, "p", 0.8).unwrap_err();
        assert!(matches!(err, ModelError::Transport(_)));
        assert_eq!(provider.calls.get(), 3);
    }

    #[test]
    fn api_errors_are_terminal() {
        let provider = FlakyProvider {
            failures: 10,
            calls: Cell::new(0),
            error: || ModelError::Api {
                status: 400,
                message: "bad request".into(),
            },
        };

        let err = instant_retry(3).generate(&provider, "p", 0.8).unwrap_err();
        assert!(matches!(err, ModelError::Api { status: 400, .. }));
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn rate_limits_are_retryable() {
        assert!(ModelError::RateLimited.is_retryable());
        assert!(!ModelError::Empty.is_retryable());
    }
}
