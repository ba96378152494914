//! Cohere provider implementation

pub mod client;
pub mod mapper;
pub mod stream;
pub mod types;

pub use client::{CohereClient, CohereModel};
