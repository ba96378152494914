//! Conversions between provider-neutral types and Cohere wire types

use crate::llm::types::{ChatStreamEvent, CompletionRequest};

use super::client::CohereModel;
use super::types::{ChatStreamRequest, StreamedChatEvent};

/// Build the wire request for a streaming chat call
pub fn to_cohere_request(request: &CompletionRequest, model: &CohereModel) -> ChatStreamRequest {
    ChatStreamRequest {
        message: request.message.clone(),
        model: model.as_str().to_string(),
        stream: true,
        preamble: request.preamble.clone(),
        documents: request.documents.documents().to_vec(),
        temperature: request.params.temperature,
        max_tokens: request.params.max_tokens,
        prompt_truncation: request.params.prompt_truncation.as_str().to_string(),
    }
}

/// Map a Cohere wire event to the provider-neutral event type
pub fn from_cohere_event(event: StreamedChatEvent) -> ChatStreamEvent {
    match event {
        StreamedChatEvent::StreamStart { generation_id } => {
            ChatStreamEvent::StreamStart { generation_id }
        }
        StreamedChatEvent::TextGeneration { text } => ChatStreamEvent::TextGeneration { text },
        StreamedChatEvent::StreamEnd { finish_reason } => {
            ChatStreamEvent::StreamEnd { finish_reason }
        }
        StreamedChatEvent::Unknown => ChatStreamEvent::Other,
    }
}
