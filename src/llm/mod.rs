//! Upstream LLM layer
//!
//! A thin abstraction over the Cohere streaming chat API: a provider trait,
//! the concrete Cohere client, and the retry-wrapped completion caller that
//! request handlers talk to.

pub mod cohere;
pub mod completion;
pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use completion::{Completer, CompletionError, RetryPolicy, PREAMBLE};
pub use error::UpstreamError;
pub use provider::{ChatProvider, EventStream};
pub use types::{ChatStreamEvent, CompletionRequest, PromptTruncation, SamplingParams};
