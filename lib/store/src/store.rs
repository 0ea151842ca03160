//! Backend-agnostic vector store front
//!
//! Owns an embedding provider and the configured backend. Populates
//! missing embeddings on insertion, validates queries, and applies the
//! `min_score`/`top_k` result policy uniformly across backends.

use std::sync::Arc;

use futures_util::future::try_join_all;
use serde::Serialize;
use tracing::debug;

use matchvec_core::{
    hybrid, Document, Error, HybridOptions, Result, SearchOptions, SearchResult,
};

use crate::backend::{BackendKind, VectorBackend};
use crate::config::BackendConfig;
use crate::embedder::EmbeddingProvider;

/// Over-fetch factor applied when results are filtered after the
/// backend query, so enough survive to fill `top_k`.
const FILTER_OVERFETCH: usize = 4;

/// Diagnostic snapshot of the store
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub documents: usize,
    pub backend: BackendKind,
}

pub struct VectorStore {
    embedder: Arc<dyn EmbeddingProvider>,
    backend: Box<dyn VectorBackend>,
}

impl VectorStore {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, backend: Box<dyn VectorBackend>) -> Self {
        Self { embedder, backend }
    }

    /// Construct with the backend selected from the environment
    /// (Pinecone, else Weaviate, else in-memory).
    pub fn from_env(embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let backend = BackendConfig::from_env().build()?;
        Ok(Self::new(embedder, backend))
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    async fn ensure_embedded(&self, mut doc: Document) -> Result<Document> {
        if doc.embedding.is_none() {
            doc.embedding = Some(self.embedder.embed(&doc.text).await?);
        }
        Ok(doc)
    }

    /// Insert a single document, embedding it first when needed.
    pub async fn insert(&self, document: Document) -> Result<()> {
        let doc = self.ensure_embedded(document).await?;
        self.backend.upsert(vec![doc]).await
    }

    /// Embed every document in the batch that lacks an embedding,
    /// issuing the provider requests concurrently. Any single failure
    /// fails the whole call; nothing is silently dropped.
    pub async fn embed_batch(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        try_join_all(
            documents
                .into_iter()
                .map(|doc| self.ensure_embedded(doc)),
        )
        .await
    }

    /// Insert a batch, embedding missing documents concurrently first.
    pub async fn insert_batch(&self, documents: Vec<Document>) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let embedded = self.embed_batch(documents).await?;
        debug!(count = embedded.len(), backend = %self.backend.kind(), "batch insert");
        self.backend.upsert(embedded).await
    }

    /// Dense search over the indexed documents.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(Error::Validation("search query is empty".to_string()));
        }

        let embedding = self.embedder.embed(query).await?;

        let filtered = options.filter.is_some() || options.min_score > 0.0;
        let fetch_k = if filtered {
            options.top_k.saturating_mul(FILTER_OVERFETCH).max(options.top_k)
        } else {
            options.top_k
        };

        let mut results = self
            .backend
            .query(&embedding, fetch_k, options.filter.as_deref())
            .await?;

        results.retain(|r| r.score >= options.min_score);
        hybrid::sort_ranked(&mut results);
        results.truncate(options.top_k);
        Ok(results)
    }

    /// Hybrid search over a caller-supplied document set, not the
    /// backend index. Documents without embeddings score 0.0 on the
    /// dense component.
    pub async fn hybrid_search(
        &self,
        query: &str,
        documents: &[Document],
        options: &HybridOptions,
    ) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(Error::Validation("search query is empty".to_string()));
        }

        let embedding = self.embedder.embed(query).await?;
        Ok(hybrid::rank_hybrid(&embedding, query, documents, options))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend.delete(id).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.backend.clear().await
    }

    pub async fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            documents: self.backend.count().await?,
            backend: self.backend.kind(),
        })
    }
}
