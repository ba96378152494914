//! Provider trait for upstream chat implementations

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

use super::{
    error::UpstreamError,
    types::{ChatStreamEvent, CompletionRequest},
};

/// A lazy, finite, non-restartable sequence of chat stream events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<ChatStreamEvent, UpstreamError>> + Send>>;

/// Interface that upstream chat implementations must satisfy
///
/// The completion caller only depends on this trait, which keeps the retry
/// loop testable against scripted in-memory providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Open a streaming chat call to the upstream service
    ///
    /// Returns a stream of events representing the incremental response, or
    /// an error if the call could not be established.
    async fn stream_chat(&self, request: CompletionRequest) -> Result<EventStream, UpstreamError>;
}
