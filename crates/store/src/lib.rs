//! Vector-store client crate for the chatdocs CLI.
//!
//! The index itself — embedding, persistence, nearest-neighbor search — lives
//! in an external store populated by a separate ingestion process. This crate
//! only speaks the store's similarity-query contract and maps results into
//! passages with their provenance.

pub mod chroma;
pub mod client;

// Re-export main types
pub use chroma::ChromaStore;
pub use client::{Passage, VectorStore};
