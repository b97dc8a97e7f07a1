//! Session configuration for the chatdocs CLI.
//!
//! Configuration is assembled exactly once at startup — defaults, then the
//! credential from the environment, then the two command-line flags, then the
//! optional interactive model override — and passed into the chat session as
//! a value. Nothing here is ambient process state, so the session can be
//! driven deterministically in tests.
//!
//! Config files are an ingestion/deployment concern and are not read here;
//! the only environment input is the API credential (a `.env` file is folded
//! into the environment by the binary before this runs).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppResult;

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default directory where the vector index is persisted.
pub const DEFAULT_PERSIST_DIRECTORY: &str = "chroma_storage";

/// Default collection to query within the store.
pub const DEFAULT_COLLECTION_NAME: &str = "documents_collection";

/// Default endpoint of the vector store serving the persisted index.
pub const DEFAULT_STORE_URL: &str = "http://localhost:8000";

/// Environment variable holding the completion-endpoint credential.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Immutable per-session configuration.
///
/// Built once at startup; the model name and store location never change for
/// the remainder of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory the vector store serves the index from
    pub persist_directory: PathBuf,

    /// Collection to query within the store
    pub collection_name: String,

    /// Base URL of the vector store
    pub store_url: String,

    /// Chat-completion model identifier
    pub model: String,

    /// API key for the completion endpoint
    pub api_key: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist_directory: PathBuf::from(DEFAULT_PERSIST_DIRECTORY),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            store_url: DEFAULT_STORE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from defaults plus the environment credential.
    ///
    /// # Example
    /// ```no_run
    /// use chatdocs_core::config::SessionConfig;
    ///
    /// let config = SessionConfig::load().expect("failed to load config");
    /// println!("model: {}", config.model);
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();
        config.api_key = std::env::var(CREDENTIAL_VAR).ok();
        Ok(config)
    }

    /// Apply the command-line flags to the configuration.
    pub fn with_overrides(
        mut self,
        persist_directory: Option<PathBuf>,
        collection_name: Option<String>,
    ) -> Self {
        if let Some(persist_directory) = persist_directory {
            self.persist_directory = persist_directory;
        }

        if let Some(collection_name) = collection_name {
            self.collection_name = collection_name;
        }

        self
    }

    /// Fix the model for the session (startup override prompt).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whether the completion-endpoint credential is configured.
    ///
    /// When this is false the program prints an instructional message and
    /// exits before the interactive loop is ever entered.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.collection_name, "documents_collection");
        assert_eq!(config.persist_directory, PathBuf::from("chroma_storage"));
        assert_eq!(config.store_url, "http://localhost:8000");
        assert!(!config.has_credential());
    }

    #[test]
    fn test_with_overrides() {
        let config = SessionConfig::default().with_overrides(
            Some(PathBuf::from("/data/index")),
            Some("notes".to_string()),
        );

        assert_eq!(config.persist_directory, PathBuf::from("/data/index"));
        assert_eq!(config.collection_name, "notes");
        // Model untouched by the flag overrides
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_with_overrides_none_keeps_defaults() {
        let config = SessionConfig::default().with_overrides(None, None);
        assert_eq!(config.persist_directory, PathBuf::from(DEFAULT_PERSIST_DIRECTORY));
        assert_eq!(config.collection_name, DEFAULT_COLLECTION_NAME);
    }

    #[test]
    fn test_with_model() {
        let config = SessionConfig::default().with_model("custom-model");
        assert_eq!(config.model, "custom-model");
    }

    #[test]
    fn test_has_credential() {
        let mut config = SessionConfig::default();
        assert!(!config.has_credential());

        config.api_key = Some(String::new());
        assert!(!config.has_credential());

        config.api_key = Some("sk-test".to_string());
        assert!(config.has_credential());
    }
}
