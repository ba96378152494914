//! Parser for Cohere's streamed chat responses
//!
//! The streaming chat endpoint replies with `application/stream+json`: one
//! JSON event object per line. This parser:
//! 1. Buffers bytes until complete lines are available
//! 2. Skips blank lines
//! 3. Parses each line as a [`StreamedChatEvent`]
//! 4. Returns a stream of parsed events

use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use crate::llm::error::UpstreamError;

use super::types::StreamedChatEvent;

pub fn parse_event_stream(
    byte_stream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>,
) -> Pin<Box<dyn Stream<Item = Result<StreamedChatEvent, UpstreamError>> + Send>> {
    // Buffer to accumulate partial lines across chunk boundaries
    let mut buffer = String::new();

    // A trailing marker item flags end-of-input, so a final line without a
    // terminating newline is still flushed instead of silently dropped.
    let terminated = byte_stream
        .map(Some)
        .chain(futures::stream::once(async { None }));

    let event_stream = terminated.flat_map(move |chunk_result| {
        let chunk = match chunk_result {
            Some(Ok(bytes)) => bytes,
            Some(Err(e)) => {
                return futures::stream::iter(vec![Err(UpstreamError::StreamError(
                    e.to_string(),
                ))]);
            }
            None => {
                // Upstream closed; whatever remains in the buffer is the
                // final (unterminated) line.
                let events: Vec<_> = parse_line(&buffer).into_iter().collect();
                buffer.clear();
                return futures::stream::iter(events);
            }
        };

        let text = match std::str::from_utf8(&chunk) {
            Ok(t) => t,
            Err(e) => {
                return futures::stream::iter(vec![Err(UpstreamError::StreamError(format!(
                    "Invalid UTF-8 in stream: {}",
                    e
                )))]);
            }
        };

        buffer.push_str(text);

        // Process complete lines
        let mut events = Vec::new();
        while let Some(newline_pos) = buffer.find('\n') {
            let line = buffer[..newline_pos].to_string();
            buffer.drain(..=newline_pos);

            if let Some(event) = parse_line(&line) {
                events.push(event);
            }
        }

        futures::stream::iter(events)
    });

    Box::pin(event_stream)
}

/// Parse one buffered line as an event; blank lines yield nothing
fn parse_line(line: &str) -> Option<Result<StreamedChatEvent, UpstreamError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<StreamedChatEvent>(line) {
        Ok(event) => Some(Ok(event)),
        Err(e) => Some(Err(UpstreamError::SerializationError(format!(
            "Failed to parse stream event: {}. Line: {}",
            e, line
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_parse_single_event() {
        let data = b"{\"event_type\":\"text-generation\",\"text\":\"Hello\"}\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        let event = events.next().await.unwrap().unwrap();
        assert_eq!(
            event,
            StreamedChatEvent::TextGeneration {
                text: "Hello".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_parse_full_event_sequence() {
        let data = b"{\"event_type\":\"stream-start\",\"generation_id\":\"gen-1\"}\n{\"event_type\":\"text-generation\",\"text\":\"Hello\"}\n{\"event_type\":\"text-generation\",\"text\":\" World\"}\n{\"event_type\":\"stream-end\",\"finish_reason\":\"COMPLETE\"}\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);

        assert!(matches!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::StreamStart { .. }
        ));
        assert_eq!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::TextGeneration {
                text: "Hello".to_string()
            }
        );
        assert_eq!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::TextGeneration {
                text: " World".to_string()
            }
        );
        assert!(matches!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::StreamEnd { .. }
        ));
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_parse_with_blank_lines() {
        let data = b"{\"event_type\":\"text-generation\",\"text\":\"A\"}\n\n\n{\"event_type\":\"text-generation\",\"text\":\"B\"}\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        assert!(events.next().await.is_some());
        assert!(events.next().await.is_some());
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_parse_chunked_data() {
        // Simulate data arriving in chunks that split a line
        let chunk1 = b"{\"event_type\":\"text-gener";
        let chunk2 = b"ation\",\"text\":\"Hello\"}\n";

        let byte_stream = Box::pin(stream::iter(vec![
            Ok(Bytes::from_static(chunk1)),
            Ok(Bytes::from_static(chunk2)),
        ]));

        let mut events = parse_event_stream(byte_stream);
        let event = events.next().await.unwrap().unwrap();
        assert_eq!(
            event,
            StreamedChatEvent::TextGeneration {
                text: "Hello".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_parse_invalid_json() {
        let data = b"{not json}\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        let result = events.next().await.unwrap();
        assert!(matches!(result, Err(UpstreamError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_parse_unknown_event_type() {
        let data = b"{\"event_type\":\"search-results\",\"documents\":[]}\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        let event = events.next().await.unwrap().unwrap();
        assert_eq!(event, StreamedChatEvent::Unknown);
    }

    #[tokio::test]
    async fn test_parse_unterminated_final_line() {
        // Upstream closes without a trailing newline after the last event
        let data = b"{\"event_type\":\"text-generation\",\"text\":\"kept\"}\n{\"event_type\":\"text-generation\",\"text\":\"tail\"}";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        assert_eq!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::TextGeneration {
                text: "kept".to_string()
            }
        );
        assert_eq!(
            events.next().await.unwrap().unwrap(),
            StreamedChatEvent::TextGeneration {
                text: "tail".to_string()
            }
        );
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_unterminated_garbage_surfaces_error() {
        let data = b"{broken";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        let result = events.next().await.unwrap();
        assert!(matches!(result, Err(UpstreamError::SerializationError(_))));
        assert!(events.next().await.is_none());
    }

    #[tokio::test]
    async fn test_parse_carriage_returns() {
        let data = b"{\"event_type\":\"text-generation\",\"text\":\"Hi\"}\r\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut events = parse_event_stream(byte_stream);
        let event = events.next().await.unwrap().unwrap();
        assert_eq!(
            event,
            StreamedChatEvent::TextGeneration {
                text: "Hi".to_string()
            }
        );
    }
}
