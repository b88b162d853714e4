pub mod aggregate;

pub use aggregate::{ChatMessage, ChatRole, ModelRef, DEFAULT_MODEL_FILENAME};
