// HTTP server modules
pub mod config;
pub mod handlers;
pub mod knowledge;
pub mod models;
pub mod routes;
pub mod state;

// Upstream LLM client layer
pub mod llm;
