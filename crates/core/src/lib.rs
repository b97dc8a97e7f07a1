//! Chatdocs Core Library
//!
//! This crate provides the foundational utilities for the chatdocs CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Session configuration

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::SessionConfig;
pub use error::{AppError, AppResult};
