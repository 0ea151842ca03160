//! Environment-driven backend selection
//!
//! Precedence: Pinecone, then Weaviate, then the in-process backend.
//! Absence of any remote configuration always selects in-process.

use tracing::info;

use matchvec_core::Result;

use crate::backend::VectorBackend;
use crate::memory::MemoryBackend;
use crate::pinecone::{PineconeBackend, PineconeConfig};
use crate::weaviate::{WeaviateBackend, WeaviateConfig};

pub const ENV_PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const ENV_PINECONE_INDEX: &str = "PINECONE_INDEX";
pub const ENV_PINECONE_ENVIRONMENT: &str = "PINECONE_ENVIRONMENT";
pub const ENV_WEAVIATE_URL: &str = "WEAVIATE_URL";
pub const ENV_WEAVIATE_API_KEY: &str = "WEAVIATE_API_KEY";

/// Resolved backend configuration, selected once at startup
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Pinecone(PineconeConfig),
    Weaviate(WeaviateConfig),
    Memory,
}

impl BackendConfig {
    /// Read backend selection from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Selection logic over an arbitrary variable source, so tests can
    /// drive it without mutating process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let nonempty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let (Some(api_key), Some(index), Some(environment)) = (
            nonempty(ENV_PINECONE_API_KEY),
            nonempty(ENV_PINECONE_INDEX),
            nonempty(ENV_PINECONE_ENVIRONMENT),
        ) {
            return BackendConfig::Pinecone(PineconeConfig {
                api_key,
                index,
                environment,
            });
        }

        if let Some(base_url) = nonempty(ENV_WEAVIATE_URL) {
            return BackendConfig::Weaviate(WeaviateConfig::new(
                base_url,
                nonempty(ENV_WEAVIATE_API_KEY),
            ));
        }

        BackendConfig::Memory
    }

    /// Construct the configured backend.
    pub fn build(self) -> Result<Box<dyn VectorBackend>> {
        match self {
            BackendConfig::Pinecone(config) => {
                info!(index = %config.index, "using pinecone backend");
                Ok(Box::new(PineconeBackend::new(config)?))
            }
            BackendConfig::Weaviate(config) => {
                info!(url = %config.base_url, "using weaviate backend");
                Ok(Box::new(WeaviateBackend::new(config)?))
            }
            BackendConfig::Memory => {
                info!("using in-memory backend");
                Ok(Box::new(MemoryBackend::new()))
            }
        }
    }
}
