//! Pinecone backend
//!
//! Maps the backend interface onto Pinecone's managed vector index:
//! batch upserts, nearest-neighbor queries with metadata attached, and
//! delete-by-id / delete-all. Document text travels in a reserved
//! `text` metadata key so results can be reconstructed from matches.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use matchvec_core::{Document, Error, Filter, Metadata, Result, SearchResult, Vector};

use crate::backend::{request_error, BackendKind, VectorBackend};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const TEXT_METADATA_KEY: &str = "text";

#[derive(Debug, Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    pub index: String,
    pub environment: String,
}

pub struct PineconeBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct UpsertEntry {
    id: String,
    values: Vec<f32>,
    metadata: Metadata,
}

#[derive(Serialize)]
struct UpsertRequest {
    vectors: Vec<UpsertEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryMatch {
    id: String,
    score: f32,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexStatsResponse {
    #[serde(default)]
    total_vector_count: usize,
}

impl PineconeBackend {
    pub fn new(config: PineconeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("http client: {e}")))?;

        let base_url = format!(
            "https://{}.svc.{}.pinecone.io",
            config.index, config.environment
        );
        debug!(index = %config.index, environment = %config.environment, "pinecone backend configured");

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<reqwest::Response> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error(path, REQUEST_TIMEOUT_SECS, e))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "{path}: HTTP {} from pinecone",
                response.status()
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl VectorBackend for PineconeBackend {
    async fn upsert(&self, documents: Vec<Document>) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let vectors: Vec<UpsertEntry> = documents
            .into_iter()
            .map(|doc| {
                let embedding = doc.embedding.ok_or_else(|| {
                    Error::Validation(format!("document {} has no embedding", doc.id))
                })?;
                let mut metadata = doc.metadata;
                metadata.insert(TEXT_METADATA_KEY.to_string(), json!(doc.text));
                Ok(UpsertEntry {
                    id: doc.id,
                    values: embedding.into_inner(),
                    metadata,
                })
            })
            .collect::<Result<_>>()?;

        debug!(count = vectors.len(), "pinecone upsert");
        let body = serde_json::to_value(UpsertRequest { vectors })
            .map_err(|e| Error::Validation(format!("upsert payload: {e}")))?;
        self.post("/vectors/upsert", body).await?;
        Ok(())
    }

    async fn query(
        &self,
        embedding: &Vector,
        top_k: usize,
        filter: Option<&dyn Filter>,
    ) -> Result<Vec<SearchResult>> {
        let body = serde_json::to_value(QueryRequest {
            vector: embedding.as_slice(),
            top_k,
            include_metadata: true,
        })
        .map_err(|e| Error::Validation(format!("query payload: {e}")))?;

        let response = self.post("/query", body).await?;
        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("query: {e}")))?;

        let results = parsed
            .matches
            .into_iter()
            .map(|m| {
                let mut metadata = m.metadata;
                let text = metadata
                    .remove(TEXT_METADATA_KEY)
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                SearchResult {
                    id: m.id,
                    score: m.score,
                    metadata,
                    text,
                }
            })
            .filter(|r| filter.map(|f| f.matches(&r.metadata)).unwrap_or(true))
            .collect();

        Ok(results)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.post("/vectors/delete", json!({ "ids": [id] })).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.post("/vectors/delete", json!({ "deleteAll": true }))
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let response = self.post("/describe_index_stats", json!({})).await?;
        let stats: IndexStatsResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("describe_index_stats: {e}")))?;
        Ok(stats.total_vector_count)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Pinecone
    }
}
