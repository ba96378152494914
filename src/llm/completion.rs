//! Retry-wrapped completion caller
//!
//! This is the only component with non-trivial logic: it opens a streaming
//! chat call, drains the stream into a single string, and retries transient
//! failures with exponential backoff. Retry state is local to each call, so
//! concurrent requests back off independently.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use thiserror::Error;

use crate::knowledge::KnowledgeBase;
use super::{
    error::UpstreamError,
    provider::ChatProvider,
    types::{ChatStreamEvent, CompletionRequest, SamplingParams},
};

/// Instruction restricting the model to the supplied documents
pub const PREAMBLE: &str = "You are a helpful assistant that only answers questions \
    using the provided business knowledge. \
    If the question is unrelated to the documents, respond politely with: \
    'I'm sorry, I can only answer questions related to Zordly or its services.'";

/// Bounds on the retry loop
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of upstream attempts (at least 1)
    pub max_attempts: u32,
    /// Delay before the first retry; doubled after every failed attempt
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
        }
    }
}

/// Errors surfaced by [`Completer::complete`]
#[derive(Debug, Error)]
pub enum CompletionError {
    /// All retry attempts against the upstream API failed
    #[error("Cohere API call failed after {attempts} retries: {last_error}")]
    Exhausted {
        attempts: u32,
        last_error: UpstreamError,
    },

    /// The upstream rejected the call with a non-retryable error
    #[error("Cohere API rejected the request: {0}")]
    Rejected(#[source] UpstreamError),
}

/// Owns the interaction with the upstream chat provider
///
/// Holds the fixed per-process configuration (preamble, knowledge documents,
/// sampling parameters, retry policy) and issues retry-wrapped streaming
/// calls on behalf of request handlers.
pub struct Completer {
    provider: Arc<dyn ChatProvider>,
    knowledge: Arc<KnowledgeBase>,
    preamble: String,
    params: SamplingParams,
    retry: RetryPolicy,
}

impl Completer {
    /// Create a completer with the default preamble, temperature and retries
    pub fn new(provider: Arc<dyn ChatProvider>, knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            provider,
            knowledge,
            preamble: PREAMBLE.to_string(),
            params: SamplingParams::new().with_temperature(0.3),
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Override the sampling parameters
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Stream a completion for `prompt`, retrying transient failures
    ///
    /// Opens a streaming call, concatenates the text fragments and returns
    /// the trimmed result. Transient failures are retried with exponential
    /// backoff (1, 2, 4, ... times the initial delay); non-retryable upstream
    /// errors fail immediately without consuming the backoff budget.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut delay = self.retry.initial_delay;
        let mut attempt = 0;

        loop {
            match self.try_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) if !e.is_retryable() => return Err(CompletionError::Rejected(e)),
                Err(e) => {
                    attempt += 1;
                    log::warn!("Attempt {}/{} failed: {}", attempt, max_attempts, e);
                    if attempt >= max_attempts {
                        return Err(CompletionError::Exhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    /// Issue one streaming call and drain it into a string
    async fn try_once(&self, prompt: &str) -> Result<String, UpstreamError> {
        let request = CompletionRequest {
            message: prompt.to_string(),
            preamble: self.preamble.clone(),
            documents: Arc::clone(&self.knowledge),
            params: self.params.clone(),
        };

        let mut stream = self.provider.stream_chat(request).await?;

        let mut response = String::new();
        while let Some(event) = stream.next().await {
            if let ChatStreamEvent::TextGeneration { text } = event? {
                response.push_str(&text);
            }
        }

        Ok(response.trim().to_string())
    }
}
