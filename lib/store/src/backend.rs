//! Backend capability interface
//!
//! All storage variants implement one trait so the active backend is
//! invisible to callers beyond configuration-time selection. Backends
//! return raw similarity-ranked results; `min_score` filtering and
//! final truncation happen in the store front.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use matchvec_core::{Document, Error, Filter, Result, SearchResult, Vector};

/// Which storage variant is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    Pinecone,
    Weaviate,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Pinecone => write!(f, "pinecone"),
            BackendKind::Weaviate => write!(f, "weaviate"),
        }
    }
}

/// Storage backend for embedded documents.
///
/// Invariant: every document handed to `upsert` carries an embedding;
/// the store front populates missing embeddings first.
#[async_trait]
pub trait VectorBackend: Send + Sync {
    /// Insert or replace documents by id
    async fn upsert(&self, documents: Vec<Document>) -> Result<()>;

    /// Return up to `top_k` results ranked by similarity to `embedding`.
    ///
    /// The in-memory backend applies `filter` before scoring; remote
    /// backends apply it to the returned matches.
    async fn query(
        &self,
        embedding: &Vector,
        top_k: usize,
        filter: Option<&dyn Filter>,
    ) -> Result<Vec<SearchResult>>;

    /// Remove one document by id
    async fn delete(&self, id: &str) -> Result<()>;

    /// Remove all documents
    async fn clear(&self) -> Result<()>;

    /// Number of indexed documents
    async fn count(&self) -> Result<usize>;

    fn kind(&self) -> BackendKind;
}

/// Translate a reqwest failure into the store's error kinds, keeping
/// timeouts distinct from other network failures.
pub(crate) fn request_error(operation: &str, timeout_secs: u64, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            operation: operation.to_string(),
            seconds: timeout_secs,
        }
    } else {
        Error::Network(format!("{operation}: {err}"))
    }
}
