//! Weaviate backend
//!
//! Maps the backend interface onto Weaviate's object store: batch object
//! creation with per-object vectors, near-vector GraphQL queries, and
//! object deletion by class and id. Document metadata is stored as a
//! JSON string property because the metadata bag is schemaless.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use matchvec_core::{Document, Error, Filter, Metadata, Result, SearchResult, Vector};

use crate::backend::{request_error, BackendKind, VectorBackend};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CLASS: &str = "JobDocument";

#[derive(Debug, Clone)]
pub struct WeaviateConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Object class holding indexed documents
    pub class: String,
}

impl WeaviateConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            class: DEFAULT_CLASS.to_string(),
        }
    }
}

pub struct WeaviateBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    class: String,
}

impl WeaviateBackend {
    pub fn new(config: WeaviateConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("http client: {e}")))?;

        debug!(url = %config.base_url, class = %config.class, "weaviate backend configured");
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            class: config.class,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn graphql(&self, query: String) -> Result<Value> {
        let url = format!("{}/v1/graphql", self.base_url);
        let response = self
            .authorized(self.client.post(&url))
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| request_error("graphql", REQUEST_TIMEOUT_SECS, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "graphql: HTTP {} from weaviate",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("graphql: {e}")))
    }
}

fn format_vector(embedding: &Vector) -> String {
    let values: Vec<String> = embedding.as_slice().iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(","))
}

#[async_trait]
impl VectorBackend for WeaviateBackend {
    async fn upsert(&self, documents: Vec<Document>) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let objects: Vec<Value> = documents
            .into_iter()
            .map(|doc| {
                let embedding = doc.embedding.ok_or_else(|| {
                    Error::Validation(format!("document {} has no embedding", doc.id))
                })?;
                let metadata_json = serde_json::to_string(&doc.metadata)
                    .map_err(|e| Error::Validation(format!("metadata for {}: {e}", doc.id)))?;
                Ok(json!({
                    "class": self.class,
                    "id": doc.id,
                    "vector": embedding.as_slice(),
                    "properties": {
                        "text": doc.text,
                        "metadata": metadata_json,
                    },
                }))
            })
            .collect::<Result<_>>()?;

        debug!(count = objects.len(), "weaviate batch insert");
        let url = format!("{}/v1/batch/objects", self.base_url);
        let response = self
            .authorized(self.client.post(&url))
            .json(&json!({ "objects": objects }))
            .send()
            .await
            .map_err(|e| request_error("batch insert", REQUEST_TIMEOUT_SECS, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "batch insert: HTTP {} from weaviate",
                response.status()
            )));
        }
        Ok(())
    }

    async fn query(
        &self,
        embedding: &Vector,
        top_k: usize,
        filter: Option<&dyn Filter>,
    ) -> Result<Vec<SearchResult>> {
        let query = format!(
            "{{ Get {{ {class}(nearVector: {{vector: {vector}}}, limit: {top_k}) \
             {{ text metadata _additional {{ id certainty }} }} }} }}",
            class = self.class,
            vector = format_vector(embedding),
        );

        let body = self.graphql(query).await?;
        let objects = body
            .get("data")
            .and_then(|d| d.get("Get"))
            .and_then(|g| g.get(&self.class))
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                Error::MalformedResponse("query: missing data.Get in graphql response".to_string())
            })?;

        let mut results = Vec::with_capacity(objects.len());
        for object in objects {
            let additional = object.get("_additional").ok_or_else(|| {
                Error::MalformedResponse("query: object without _additional".to_string())
            })?;
            let id = additional
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| Error::MalformedResponse("query: object without id".to_string()))?
                .to_string();
            let certainty = additional
                .get("certainty")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            let text = object
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let metadata: Metadata = object
                .get("metadata")
                .and_then(|v| v.as_str())
                .and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default();

            // Weaviate certainty is (1 + cosine) / 2; map back to cosine
            // so all backends score on the same scale
            let score = certainty * 2.0 - 1.0;

            let result = SearchResult {
                id,
                score,
                metadata,
                text,
            };
            if filter.map(|f| f.matches(&result.metadata)).unwrap_or(true) {
                results.push(result);
            }
        }
        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/v1/objects/{}/{id}", self.base_url, self.class);
        let response = self
            .authorized(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| request_error("delete", REQUEST_TIMEOUT_SECS, e))?;

        // 404 means already gone, which is fine for delete semantics
        if !response.status().is_success() && response.status().as_u16() != 404 {
            return Err(Error::Network(format!(
                "delete: HTTP {} from weaviate",
                response.status()
            )));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let url = format!("{}/v1/batch/objects", self.base_url);
        let body = json!({
            "match": {
                "class": self.class,
                "where": {
                    "operator": "Like",
                    "path": ["id"],
                    "valueText": "*",
                },
            },
        });
        let response = self
            .authorized(self.client.delete(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error("clear", REQUEST_TIMEOUT_SECS, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "clear: HTTP {} from weaviate",
                response.status()
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let query = format!(
            "{{ Aggregate {{ {class} {{ meta {{ count }} }} }} }}",
            class = self.class
        );
        let body = self.graphql(query).await?;
        body.get("data")
            .and_then(|d| d.get("Aggregate"))
            .and_then(|a| a.get(&self.class))
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("meta"))
            .and_then(|m| m.get("count"))
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .ok_or_else(|| {
                Error::MalformedResponse("count: missing Aggregate meta count".to_string())
            })
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Weaviate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_class() {
        let config = WeaviateConfig::new("http://localhost:8080", None);
        assert_eq!(config.class, "JobDocument");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let backend =
            WeaviateBackend::new(WeaviateConfig::new("http://localhost:8080/", None)).unwrap();
        assert_eq!(backend.base_url, "http://localhost:8080");
        assert_eq!(backend.kind(), BackendKind::Weaviate);
    }

    #[test]
    fn test_format_vector() {
        let v = Vector::new(vec![0.5, -1.0]);
        assert_eq!(format_vector(&v), "[0.5,-1]");
    }

    #[test]
    fn test_certainty_to_cosine() {
        // certainty 1.0 -> cosine 1.0, certainty 0.5 -> cosine 0.0
        assert_eq!(1.0f32 * 2.0 - 1.0, 1.0);
        assert_eq!(0.5f32 * 2.0 - 1.0, 0.0);
    }
}
