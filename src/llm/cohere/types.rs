//! Cohere wire types for the streaming chat endpoint

use serde::{Deserialize, Serialize};

use crate::knowledge::Document;

/// Request body for `POST /v1/chat` with `stream: true`
#[derive(Debug, Clone, Serialize)]
pub struct ChatStreamRequest {
    pub message: String,
    pub model: String,
    pub stream: bool,
    pub preamble: String,
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub prompt_truncation: String,
}

/// One event in Cohere's newline-delimited JSON response stream
///
/// Events this layer does not consume (tool calls, citations, search
/// results) deserialize to `Unknown` and are skipped downstream.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "event_type", rename_all = "kebab-case")]
pub enum StreamedChatEvent {
    StreamStart {
        #[serde(default)]
        generation_id: Option<String>,
    },
    TextGeneration {
        text: String,
    },
    StreamEnd {
        #[serde(default)]
        finish_reason: Option<String>,
    },
    #[serde(other)]
    Unknown,
}
