//! Process-wide knowledge store
//!
//! A static document set loaded once at startup and handed unchanged to
//! every upstream call. Never mutated after load, so it is shared across
//! requests behind an `Arc` with no locking.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One opaque key-value record grounding the model's answers
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Errors loading the knowledge file at startup
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed knowledge file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The static, read-only document set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
}

impl KnowledgeBase {
    /// Load the document set from a JSON file (a top-level array of objects)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| KnowledgeError::Parse {
            path: display,
            source,
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
