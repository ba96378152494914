// Handlers module

pub mod chat;
pub mod meta;

pub use chat::{chat_handler, ApiError};
pub use meta::{health_handler, reset_chat_handler, root_handler};
