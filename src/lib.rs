//! # matchvec
//!
//! Candidate/job matching engine with hybrid semantic search over
//! pluggable vector backends.
//!
//! matchvec pairs a backend-agnostic vector store (in-process, Pinecone,
//! or Weaviate, selected by environment at startup) with a deterministic
//! algorithmic compatibility scorer, so match generation works with or
//! without a generative model behind it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use matchvec::prelude::*;
//!
//! # async fn run() -> matchvec::Result<()> {
//! // Index job postings
//! let store = VectorStore::from_env(Arc::new(HashEmbedder::default()))?;
//! store
//!     .insert_batch(vec![
//!         Document::new("job-1", "Senior Rust engineer, distributed systems"),
//!         Document::new("job-2", "Frontend developer, React and TypeScript"),
//!     ])
//!     .await?;
//!
//! // Search
//! let results = store.search("rust engineer", &SearchOptions::default()).await?;
//!
//! // Score a candidate against a posting, no model required
//! let candidate = CandidateProfile::new(vec!["rust".to_string()], "5 years");
//! let job = JobPosting::new("Engineer", "Acme", vec!["rust".to_string()]);
//! let result = MatchOrchestrator::algorithmic_only()
//!     .match_candidate(&candidate, &job)
//!     .await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`matchvec-core`](https://docs.rs/matchvec-core) - Vectors, documents, filters, hybrid ranking
//! - [`matchvec-score`](https://docs.rs/matchvec-score) - Deterministic compatibility scoring
//! - [`matchvec-store`](https://docs.rs/matchvec-store) - Embedding providers, backends, orchestration

// Re-export core types
pub use matchvec_core::{
    hybrid, Document, Error, Filter, FilterCondition, HybridOptions, Metadata, MetadataFilter,
    Result, SearchOptions, SearchResult, Vector,
};

// Re-export scoring
pub use matchvec_score::{CandidateProfile, JobPosting, MatchResult, MatchScorer};

// Re-export store
pub use matchvec_store::{
    BackendConfig, BackendKind, EmbeddingProvider, GenerativeMatcher, HashEmbedder,
    MatchOrchestrator, MemoryBackend, PineconeBackend, PineconeConfig, RemoteEmbedder, StoreStats,
    VectorBackend, VectorStore, WeaviateBackend, WeaviateConfig,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BackendConfig, BackendKind, CandidateProfile, Document, EmbeddingProvider, Error, Filter,
        FilterCondition, HashEmbedder, HybridOptions, JobPosting, MatchOrchestrator, MatchResult,
        MatchScorer, MemoryBackend, Metadata, MetadataFilter, Result, SearchOptions, SearchResult,
        StoreStats, Vector, VectorBackend, VectorStore,
    };
}
