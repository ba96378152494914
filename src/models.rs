// HTTP request/response bodies

use serde::{Deserialize, Serialize};

/// Inbound chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Chat response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    /// ISO-8601 UTC, generated at response construction time
    pub timestamp: String,
}

/// Liveness payload for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Simple message envelope (root welcome, reset-chat ack)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let json = r#"{"message":"What services do you offer?"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "What services do you offer?");
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_chat_request_with_session_id() {
        let json = r#"{"message":"hi","session_id":"abc-123"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.session_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_chat_request_missing_message_fails() {
        let json = r#"{"session_id":"abc-123"}"#;
        assert!(serde_json::from_str::<ChatRequest>(json).is_err());
    }

    #[test]
    fn test_chat_request_wrong_type_fails() {
        let json = r#"{"message":42}"#;
        assert!(serde_json::from_str::<ChatRequest>(json).is_err());
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            response: "We build websites.".to_string(),
            session_id: "abc-123".to_string(),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["response"], "We build websites.");
        assert_eq!(value["session_id"], "abc-123");
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "healthy");
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody {
            detail: "something broke".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"detail":"something broke"}"#);
    }
}
