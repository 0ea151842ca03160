use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vector::Vector;

/// Opaque metadata bag attached to a document.
///
/// Conventional keys for job postings: `jobId`, `title`, `company`.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A searchable document: text plus an optional dense embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    /// Absent until the store obtains one from the embedding provider.
    /// Immutable once computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vector>,
    #[serde(default)]
    pub metadata: Metadata,
    pub text: String,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            embedding: None,
            metadata: Metadata::new(),
            text: text.into(),
        }
    }

    /// Create a document with a freshly generated UUID id
    #[inline]
    #[must_use]
    pub fn with_generated_id(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), text)
    }

    #[inline]
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vector) -> Self {
        self.embedding = Some(embedding);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[inline]
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}

/// A single ranked search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub text: String,
}

impl SearchResult {
    pub fn from_document(doc: &Document, score: f32) -> Self {
        Self {
            id: doc.id.clone(),
            score,
            metadata: doc.metadata.clone(),
            text: doc.text.clone(),
        }
    }
}

/// Options for dense search
pub struct SearchOptions {
    /// Maximum number of results returned
    pub top_k: usize,
    /// Inclusive lower bound on result scores
    pub min_score: f32,
    /// Metadata predicate applied before scoring (in-process) or to
    /// returned results (remote backends)
    pub filter: Option<Box<dyn crate::filter::Filter>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            min_score: 0.0,
            filter: None,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Box<dyn crate::filter::Filter>) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl std::fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOptions")
            .field("top_k", &self.top_k)
            .field("min_score", &self.min_score)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// Options for hybrid (dense + keyword) search
#[derive(Debug, Clone)]
pub struct HybridOptions {
    pub top_k: usize,
    pub min_score: f32,
    /// Weight of the sparse keyword-overlap score
    pub keyword_boost: f32,
    /// Weight of the dense cosine-similarity score
    pub vector_boost: f32,
}

impl Default for HybridOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            min_score: 0.0,
            keyword_boost: 0.3,
            vector_boost: 0.7,
        }
    }
}

impl HybridOptions {
    #[must_use]
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    #[must_use]
    pub fn boosts(mut self, vector_boost: f32, keyword_boost: f32) -> Self {
        self.vector_boost = vector_boost;
        self.keyword_boost = keyword_boost;
        self
    }
}
