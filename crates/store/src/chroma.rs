//! Chroma HTTP client.
//!
//! Consumes a Chroma server's collection-query API. The collection is
//! resolved once at startup; the connection (collection id plus HTTP client)
//! is then held for the lifetime of the session.

use crate::client::{Passage, VectorStore};
use chatdocs_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Collection descriptor returned by the store.
#[derive(Debug, Deserialize)]
struct Collection {
    id: String,
    #[allow(dead_code)]
    name: String,
}

/// Wire request for a similarity query.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query_texts: Vec<&'a str>,
    n_results: usize,
    include: Vec<&'static str>,
}

/// Wire response for a similarity query.
///
/// Results come back batched per query text; this program always sends a
/// single query, so only the first batch is consumed.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Vec<Vec<String>>,
    metadatas: Vec<Vec<serde_json::Value>>,
}

/// Per-passage metadata written by the ingestion process.
#[derive(Debug, Deserialize)]
struct PassageMetadata {
    filename: String,
    line_number: u64,
}

/// Client for a Chroma vector store reached over HTTP.
pub struct ChromaStore {
    base_url: String,
    collection_id: String,
    client: reqwest::Client,
}

impl ChromaStore {
    /// Connect to the store and resolve the collection.
    ///
    /// Classifies failures at the boundary: an unreachable store is
    /// `StoreUnavailable`, a missing collection is `CollectionNotFound`.
    pub async fn connect(
        base_url: impl Into<String>,
        collection_name: &str,
    ) -> AppResult<Self> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::new();

        tracing::info!(%base_url, collection = collection_name, "Connecting to vector store");

        let url = format!("{}/api/v1/collections/{}", base_url, collection_name);
        let response = client.get(&url).send().await.map_err(|e| {
            AppError::StoreUnavailable(format!("{}: {}", base_url, e))
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::CollectionNotFound(collection_name.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Store(format!(
                "collection lookup failed ({}): {}",
                status, error_text
            )));
        }

        let collection: Collection = response
            .json()
            .await
            .map_err(|e| AppError::Store(format!("failed to parse collection: {}", e)))?;

        tracing::info!(collection_id = %collection.id, "Vector store connected");

        Ok(Self {
            base_url,
            collection_id: collection.id,
            client,
        })
    }
}

#[async_trait::async_trait]
impl VectorStore for ChromaStore {
    async fn query(&self, query: &str, n_results: usize) -> AppResult<Vec<Passage>> {
        tracing::info!(n_results, "Querying vector store");
        tracing::debug!(query, "Query text");

        let request = QueryRequest {
            query_texts: vec![query],
            n_results,
            include: vec!["documents", "metadatas"],
        };

        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, self.collection_id
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", self.base_url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Store(format!(
                "query failed ({}): {}",
                status, error_text
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::Store(format!("failed to parse query response: {}", e)))?;

        let passages = passages_from_response(query_response)?;
        tracing::info!(count = passages.len(), "Retrieved passages");

        Ok(passages)
    }
}

/// Zip the first result batch's documents with their metadata.
fn passages_from_response(response: QueryResponse) -> AppResult<Vec<Passage>> {
    let documents = response.documents.into_iter().next().unwrap_or_default();
    let metadatas = response.metadatas.into_iter().next().unwrap_or_default();

    if documents.len() != metadatas.len() {
        return Err(AppError::Store(format!(
            "mismatched result batches: {} documents, {} metadata entries",
            documents.len(),
            metadatas.len()
        )));
    }

    documents
        .into_iter()
        .zip(metadatas)
        .map(|(text, metadata)| {
            let metadata: PassageMetadata =
                serde_json::from_value(metadata).map_err(|e| {
                    AppError::Store(format!("malformed passage metadata: {}", e))
                })?;

            Ok(Passage {
                text,
                filename: metadata.filename,
                line_number: metadata.line_number,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> QueryResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_query_request_wire_shape() {
        let request = QueryRequest {
            query_texts: vec!["what is rust?"],
            n_results: 5,
            include: vec!["documents", "metadatas"],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query_texts"], json!(["what is rust?"]));
        assert_eq!(json["n_results"], 5);
        assert_eq!(json["include"], json!(["documents", "metadatas"]));
    }

    #[test]
    fn test_passages_from_response() {
        let response = response(json!({
            "documents": [["first text", "second text"]],
            "metadatas": [[
                {"filename": "a.txt", "line_number": 3},
                {"filename": "b.txt", "line_number": 14}
            ]]
        }));

        let passages = passages_from_response(response).unwrap();
        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "first text");
        assert_eq!(passages[0].filename, "a.txt");
        assert_eq!(passages[0].line_number, 3);
        assert_eq!(passages[1].citation(), "b.txt: line 14");
    }

    #[test]
    fn test_passages_preserve_store_order() {
        let response = response(json!({
            "documents": [["z", "a", "m"]],
            "metadatas": [[
                {"filename": "z.txt", "line_number": 1},
                {"filename": "a.txt", "line_number": 2},
                {"filename": "m.txt", "line_number": 3}
            ]]
        }));

        let passages = passages_from_response(response).unwrap();
        let names: Vec<&str> = passages.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, ["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_empty_batches() {
        let response = response(json!({"documents": [], "metadatas": []}));
        let passages = passages_from_response(response).unwrap();
        assert!(passages.is_empty());
    }

    #[test]
    fn test_malformed_metadata() {
        let response = response(json!({
            "documents": [["text"]],
            "metadatas": [[{"filename": "a.txt"}]]
        }));

        let err = passages_from_response(response).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[test]
    fn test_mismatched_batches() {
        let response = response(json!({
            "documents": [["one", "two"]],
            "metadatas": [[{"filename": "a.txt", "line_number": 1}]]
        }));

        let err = passages_from_response(response).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
