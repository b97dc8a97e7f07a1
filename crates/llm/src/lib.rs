//! Chat-completion integration crate for the chatdocs CLI.
//!
//! This crate provides the client abstraction for hosted chat-completion
//! endpoints, an OpenAI-compatible provider, and the prompt builder that
//! turns a query plus retrieved context into the two-message prompt the
//! endpoint consumes.
//!
//! # Example
//! ```no_run
//! use chatdocs_llm::{build_prompt, CompletionClient, CompletionRequest, OpenAiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new("sk-test");
//! let messages = build_prompt("What is a vector index?", &["a passage".to_string()]);
//! let request = CompletionRequest::new(messages, "gpt-4o-mini");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod prompt;
pub mod providers;

// Re-export main types
pub use client::{
    ChatMessage, ChatRole, CompletionClient, CompletionRequest, CompletionResponse,
    CompletionUsage,
};
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use providers::OpenAiClient;
