//! Chat-completion provider implementations.

mod openai;

pub use openai::OpenAiClient;
