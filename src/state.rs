// Process-wide shared state

use std::sync::Arc;

use crate::llm::Completer;

pub type SharedState = Arc<AppState>;

/// State shared by every request handler
///
/// The completer owns the upstream client handle and the knowledge store;
/// both are constructed once at startup and never mutated afterwards, so no
/// locking is needed.
pub struct AppState {
    pub completer: Completer,
}

impl AppState {
    pub fn new(completer: Completer) -> SharedState {
        Arc::new(Self { completer })
    }
}
