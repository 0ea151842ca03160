//! Embedding providers
//!
//! Converts text into fixed-dimension vectors. [`RemoteEmbedder`] talks to
//! an external embedding HTTP service; [`HashEmbedder`] is a deterministic
//! local provider used when no service is configured and in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use matchvec_core::{Error, Result, Vector};

use crate::backend::request_error;

pub const DEFAULT_EMBEDDING_DIM: usize = 256;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Text-to-vector provider
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one piece of text. Empty or blank input is a validation error.
    async fn embed(&self, text: &str) -> Result<Vector>;

    /// Dimension of the vectors this provider produces
    fn dimension(&self) -> usize;

    /// Cosine similarity primitive over two vectors, 0.0 when either is empty
    fn cosine_similarity(&self, a: &Vector, b: &Vector) -> f32 {
        a.cosine_similarity(b)
    }
}

/// Deterministic local embedder hashing character trigrams and words
/// into a normalized fixed-dimension vector.
///
/// Not a semantic model: identical text always embeds identically, and
/// lexically similar text lands nearby, which is enough for offline
/// operation and reproducible tests.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl HashEmbedder {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_sync(&self, text: &str) -> Vector {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();

        for trigram in trigrams(&normalized) {
            let mut hasher = DefaultHasher::new();
            trigram.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            vector[pos] += 1.0;
        }

        // Words contribute more than trigrams
        for word in normalized.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            vector[pos] += 2.0;
        }

        let mut vector = Vector::new(vector);
        vector.normalize();
        vector
    }
}

fn trigrams(s: &str) -> Vec<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();
    if chars.len() < 3 {
        return Vec::new();
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vector> {
        if text.trim().is_empty() {
            return Err(Error::Validation("cannot embed empty text".to_string()));
        }
        Ok(self.embed_sync(text))
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    vector: Vec<f32>,
    dimension: usize,
}

/// Client for an external embedding HTTP service.
///
/// `POST {base_url}/embed` with `{"input": text}`, expecting
/// `{"vector": [...], "dimension": n}`.
pub struct RemoteEmbedder {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    dim: usize,
}

impl RemoteEmbedder {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, dim: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            dim,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for RemoteEmbedder {
    async fn embed(&self, text: &str) -> Result<Vector> {
        if text.trim().is_empty() {
            return Err(Error::Validation("cannot embed empty text".to_string()));
        }

        let url = format!("{}/embed", self.base_url);
        let mut request = self.client.post(&url).json(&EmbedRequest { input: text });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_error("embed", REQUEST_TIMEOUT_SECS, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "embed: HTTP {} from {url}",
                response.status()
            )));
        }

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("embed: {e}")))?;

        if body.vector.len() != body.dimension {
            return Err(Error::MalformedResponse(format!(
                "embed: declared dimension {} but got {} values",
                body.dimension,
                body.vector.len()
            )));
        }

        Ok(Vector::new(body.vector))
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_embedder_deterministic() {
        let embedder = HashEmbedder::new(64);
        let a = embedder.embed("rust engineer").await.unwrap();
        let b = embedder.embed("rust engineer").await.unwrap();
        assert_eq!(a, b);

        let c = embedder.embed("pastry chef").await.unwrap();
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_hash_embedder_dimension_and_norm() {
        let embedder = HashEmbedder::new(64);
        let v = embedder.embed("hello world").await.unwrap();
        assert_eq!(v.dim(), 64);

        let norm: f32 = v.as_slice().iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_hash_embedder_rejects_empty_input() {
        let embedder = HashEmbedder::default();
        let err = embedder.embed("   ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_similar_text_scores_higher() {
        let embedder = HashEmbedder::default();
        let query = embedder.embed("senior rust engineer").await.unwrap();
        let close = embedder.embed("rust engineer").await.unwrap();
        let far = embedder.embed("marketing manager fashion").await.unwrap();

        assert!(query.cosine_similarity(&close) > query.cosine_similarity(&far));
    }

    #[test]
    fn test_cosine_primitive_zero_on_empty() {
        let embedder = HashEmbedder::default();
        let empty = Vector::new(vec![]);
        let v = Vector::new(vec![1.0]);
        assert_eq!(embedder.cosine_similarity(&empty, &v), 0.0);
    }
}
