//! In-process backend
//!
//! Reference implementation: an associative index guarded by a read/write
//! lock, with dense search as a full cosine scan. O(n * d) per query,
//! fine at moderate document counts and for correctness testing.

use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;

use matchvec_core::{hybrid, Document, Filter, Result, SearchResult, Vector};

use crate::backend::{BackendKind, VectorBackend};

#[derive(Default)]
pub struct MemoryBackend {
    documents: RwLock<AHashMap<String, Document>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorBackend for MemoryBackend {
    async fn upsert(&self, documents: Vec<Document>) -> Result<()> {
        let mut index = self.documents.write();
        for doc in documents {
            index.insert(doc.id.clone(), doc);
        }
        Ok(())
    }

    async fn query(
        &self,
        embedding: &Vector,
        top_k: usize,
        filter: Option<&dyn Filter>,
    ) -> Result<Vec<SearchResult>> {
        let index = self.documents.read();
        let mut results: Vec<SearchResult> = index
            .values()
            .filter(|doc| filter.map(|f| f.matches(&doc.metadata)).unwrap_or(true))
            .map(|doc| {
                let score = doc
                    .embedding
                    .as_ref()
                    .map(|e| embedding.cosine_similarity(e))
                    .unwrap_or(0.0);
                SearchResult::from_document(doc, score)
            })
            .collect();

        hybrid::sort_ranked(&mut results);
        results.truncate(top_k);
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.documents.write().remove(id);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.documents.write().clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.documents.read().len())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchvec_core::{FilterCondition, MetadataFilter};
    use serde_json::json;

    fn doc(id: &str, embedding: Vec<f32>) -> Document {
        Document::new(id, format!("text for {id}")).with_embedding(Vector::new(embedding))
    }

    #[tokio::test]
    async fn test_upsert_and_count() {
        let backend = MemoryBackend::new();
        backend
            .upsert(vec![doc("a", vec![1.0, 0.0]), doc("b", vec![0.0, 1.0])])
            .await
            .unwrap();
        assert_eq!(backend.count().await.unwrap(), 2);

        // upsert with same id replaces
        backend.upsert(vec![doc("a", vec![0.5, 0.5])]).await.unwrap();
        assert_eq!(backend.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_query_exact_match_first() {
        let backend = MemoryBackend::new();
        backend
            .upsert(vec![doc("a", vec![1.0, 0.0]), doc("b", vec![0.0, 1.0])])
            .await
            .unwrap();

        let results = backend
            .query(&Vector::new(vec![1.0, 0.0]), 10, None)
            .await
            .unwrap();

        assert_eq!(results[0].id, "a");
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_query_respects_top_k() {
        let backend = MemoryBackend::new();
        backend
            .upsert(vec![
                doc("a", vec![0.9, 0.1]),
                doc("b", vec![0.5, 0.5]),
                doc("c", vec![0.7, 0.3]),
            ])
            .await
            .unwrap();

        let results = backend
            .query(&Vector::new(vec![1.0, 0.0]), 2, None)
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "c");
    }

    #[tokio::test]
    async fn test_filter_applied_before_scoring() {
        let backend = MemoryBackend::new();
        let mut matching = doc("a", vec![1.0, 0.0]);
        matching.metadata.insert("company".to_string(), json!("Acme"));
        let mut other = doc("b", vec![1.0, 0.0]);
        other.metadata.insert("company".to_string(), json!("Globex"));
        backend.upsert(vec![matching, other]).await.unwrap();

        let filter = MetadataFilter::new(FilterCondition::Equals {
            field: "company".to_string(),
            value: json!("Acme"),
        });
        let results = backend
            .query(&Vector::new(vec![1.0, 0.0]), 10, Some(&filter))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let backend = MemoryBackend::new();
        backend
            .upsert(vec![doc("a", vec![1.0, 0.0]), doc("b", vec![0.0, 1.0])])
            .await
            .unwrap();

        backend.delete("a").await.unwrap();
        let results = backend
            .query(&Vector::new(vec![1.0, 0.0]), 10, None)
            .await
            .unwrap();
        assert!(results.iter().all(|r| r.id != "a"));

        backend.clear().await.unwrap();
        assert_eq!(backend.count().await.unwrap(), 0);
    }
}
