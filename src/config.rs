//! Startup configuration from the environment
//!
//! Values come from the process environment; `main` loads a local `.env`
//! file first via dotenvy, so either source works. A missing API key is a
//! fatal startup error.

use std::path::PathBuf;

use thiserror::Error;

use crate::knowledge::KnowledgeError;

/// Default CORS origin allow-list
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
    &["https://devin-bot.vercel.app", "http://localhost:5173"];

const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge.json";
const DEFAULT_PORT: u16 = 8000;

/// Fatal errors that prevent the process from serving traffic
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("COHERE_API_KEY not found in environment")]
    MissingApiKey,

    #[error("Invalid {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

/// Process-wide configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret API key for the upstream service
    pub api_key: String,
    /// Path to the static knowledge file
    pub knowledge_path: PathBuf,
    /// Port to bind the HTTP server on
    pub port: u16,
    /// CORS origin allow-list
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, StartupError> {
        let api_key = std::env::var("COHERE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(StartupError::MissingApiKey)?;

        let knowledge_path = std::env::var("KNOWLEDGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_KNOWLEDGE_PATH));

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| StartupError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => {
                let origins = parse_origins(&raw);
                for origin in &origins {
                    if !origin_is_valid(origin) {
                        return Err(StartupError::InvalidVar {
                            name: "CORS_ALLOWED_ORIGINS",
                            value: origin.clone(),
                        });
                    }
                }
                origins
            }
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            api_key,
            knowledge_path,
            port,
            allowed_origins,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A CORS origin must be `scheme://host[:port]`. warp's cors builder panics
/// on anything else, so bad values are rejected here at startup instead.
fn origin_is_valid(raw: &str) -> bool {
    let uri: warp::http::Uri = match raw.parse() {
        Ok(uri) => uri,
        Err(_) => return false,
    };

    uri.scheme().is_some()
        && uri.authority().is_some()
        && (uri.path().is_empty() || uri.path() == "/")
        && uri.query().is_none()
}
