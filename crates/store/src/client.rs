//! Vector-store abstraction and result types.

use chatdocs_core::AppResult;
use serde::{Deserialize, Serialize};

/// A retrieved chunk of source-document text plus its provenance.
///
/// Ephemeral: owned by the loop iteration that fetched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// The document text returned by the store
    pub text: String,

    /// Source file the passage came from
    pub filename: String,

    /// Line within the source file
    pub line_number: u64,
}

impl Passage {
    /// Render the citation line for this passage.
    pub fn citation(&self) -> String {
        format!("{}: line {}", self.filename, self.line_number)
    }
}

/// Trait for vector-store clients.
///
/// Abstracts the external index so the chat session can run against a mock
/// in tests. The store is assumed pre-populated with `filename` and
/// `line_number` metadata by a separate ingestion process.
#[async_trait::async_trait]
pub trait VectorStore: Send + Sync {
    /// Similarity-search the store and return the top passages, best first.
    async fn query(&self, query: &str, n_results: usize) -> AppResult<Vec<Passage>>;
}
