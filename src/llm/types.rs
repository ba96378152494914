//! Provider-neutral types for the upstream chat layer

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;

/// A single grounded chat call to the upstream model
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The user's message text
    pub message: String,
    /// System-level instruction constraining the model's behavior
    pub preamble: String,
    /// Documents grounding the answer, shared read-only across requests
    pub documents: Arc<KnowledgeBase>,
    /// Sampling parameters
    pub params: SamplingParams,
}

/// Parameters for controlling text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// How to handle prompts exceeding the model's context budget
    pub prompt_truncation: PromptTruncation,
}

impl SamplingParams {
    pub fn new() -> Self {
        Self {
            temperature: None,
            max_tokens: None,
            prompt_truncation: PromptTruncation::Auto,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the prompt truncation mode
    pub fn with_prompt_truncation(mut self, mode: PromptTruncation) -> Self {
        self.prompt_truncation = mode;
        self
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt truncation mode for inputs exceeding the context window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromptTruncation {
    /// Let the upstream service drop content to fit
    Auto,
    /// Fail the call instead of truncating
    Off,
}

impl PromptTruncation {
    pub fn as_str(&self) -> &str {
        match self {
            PromptTruncation::Auto => "AUTO",
            PromptTruncation::Off => "OFF",
        }
    }
}

/// Events emitted during a streamed chat response
#[derive(Debug, Clone, PartialEq)]
pub enum ChatStreamEvent {
    /// Response begins
    StreamStart { generation_id: Option<String> },
    /// Incremental text fragment
    TextGeneration { text: String },
    /// Response complete
    StreamEnd { finish_reason: Option<String> },
    /// Event type this layer does not consume
    Other,
}
