//! # matchvec Store
//!
//! Vector store layer for matchvec: embedding providers, the
//! backend-polymorphic vector store, and match orchestration.
//!
//! The store front ([`VectorStore`]) is backend-agnostic: callers see
//! the same insert/search/delete surface whether documents live in the
//! in-process index, a Pinecone index, or a Weaviate instance. The
//! backend is chosen once at startup from the environment
//! ([`BackendConfig::from_env`]), Pinecone taking precedence over
//! Weaviate, with the in-process index as the always-available default.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use matchvec_core::{Document, SearchOptions};
//! use matchvec_store::{HashEmbedder, VectorStore};
//!
//! # async fn run() -> matchvec_core::Result<()> {
//! let store = VectorStore::from_env(Arc::new(HashEmbedder::default()))?;
//! store.insert(Document::new("job-1", "Senior Rust engineer")).await?;
//! let results = store.search("rust", &SearchOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod embedder;
pub mod memory;
pub mod orchestrator;
pub mod pinecone;
pub mod store;
pub mod weaviate;

pub use backend::{BackendKind, VectorBackend};
pub use config::BackendConfig;
pub use embedder::{EmbeddingProvider, HashEmbedder, RemoteEmbedder, DEFAULT_EMBEDDING_DIM};
pub use memory::MemoryBackend;
pub use orchestrator::{GenerativeMatcher, MatchOrchestrator};
pub use pinecone::{PineconeBackend, PineconeConfig};
pub use store::{StoreStats, VectorStore};
pub use weaviate::{WeaviateBackend, WeaviateConfig};
