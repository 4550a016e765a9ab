//! # Text Generation
//!
//! The hosted text-generation service is reached through [`TextGenerator`]: one prompt in,
//! one reply out, no streaming. The crate ships two implementations that need no network:
//! [`OfflineTextGenerator`] for deployments without an endpoint, and
//! [`ScriptedTextGenerator`], which replays queued replies and records every prompt.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, instrument};

/// Failures of a generation call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InferenceError {
    #[error("Inference service unavailable: {0}")]
    Unavailable(String),

    #[error("Inference quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Inference request timed out")]
    Timeout,

    #[error("Inference service error: {0}")]
    Service(String),
}

/// Single request/response text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Generator for deployments with no inference endpoint: every call fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct OfflineTextGenerator;

#[async_trait]
impl TextGenerator for OfflineTextGenerator {
    #[instrument(skip_all)]
    async fn generate(&self, _prompt: &str) -> Result<String, InferenceError> {
        debug!("No inference endpoint configured");
        Err(InferenceError::Unavailable(
            "no inference endpoint configured".to_string(),
        ))
    }
}

/// Generator that answers from a queue of scripted outcomes.
///
/// Each call pops the next outcome; once the script is exhausted calls fail as
/// unavailable. Every prompt received is recorded.
///
/// ```rust
/// use tyce::clients::{ScriptedTextGenerator, TextGenerator, InferenceError};
///
/// #[tokio::main]
/// async fn main() {
///     let generator = ScriptedTextGenerator::new()
///         .reply_with("{}")
///         .fail_with(InferenceError::Timeout);
///
///     assert_eq!(generator.generate("first").await, Ok("{}".to_string()));
///     assert_eq!(generator.generate("second").await, Err(InferenceError::Timeout));
///     assert_eq!(generator.call_count(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct ScriptedTextGenerator {
    script: Mutex<VecDeque<Result<String, InferenceError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn reply_with(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    /// Queues a failed call.
    pub fn fail_with(self, error: InferenceError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<String, InferenceError>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }

    /// Number of `generate` calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    #[instrument(skip_all)]
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let next = self.script.lock().ok().and_then(|mut script| script.pop_front());
        debug!(scripted = next.is_some(), "Replaying scripted outcome");
        next.unwrap_or_else(|| Err(InferenceError::Unavailable("script exhausted".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_generator_always_fails() {
        let result = OfflineTextGenerator.generate("anything").await;
        assert!(matches!(result, Err(InferenceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_scripted_generator_records_prompts_and_runs_dry() {
        let generator = ScriptedTextGenerator::new().reply_with("ok");

        assert_eq!(generator.generate("p1").await, Ok("ok".to_string()));
        assert!(matches!(
            generator.generate("p2").await,
            Err(InferenceError::Unavailable(_))
        ));
        assert_eq!(generator.prompts(), vec!["p1".to_string(), "p2".to_string()]);
    }
}
