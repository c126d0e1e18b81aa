// Service exports
pub mod llm;

pub use llm::{HttpLlmClient, HttpLlmOptions, LlmClient};
