//! # matchvec Core
//!
//! Core types for the matchvec matching & search engine.
//!
//! This crate provides the fundamental data structures and ranking math:
//!
//! - [`Vector`] - Dense embedding vector with cosine similarity
//! - [`Document`] - A piece of job text with id, metadata, and optional embedding
//! - [`SearchResult`] - One ranked search hit
//! - [`hybrid`] - Dense + keyword hybrid ranking
//! - [`Filter`] - Metadata predicates for pre-scoring filtering
//!
//! ## Example
//!
//! ```rust
//! use matchvec_core::{Document, HybridOptions, Vector, hybrid};
//!
//! let docs = vec![
//!     Document::new("job-1", "Senior Rust engineer, distributed systems")
//!         .with_embedding(Vector::new(vec![1.0, 0.0])),
//!     Document::new("job-2", "Frontend developer, React")
//!         .with_embedding(Vector::new(vec![0.0, 1.0])),
//! ];
//!
//! let query = Vector::new(vec![1.0, 0.0]);
//! let results = hybrid::rank_hybrid(&query, "rust engineer", &docs, &HybridOptions::default());
//! assert_eq!(results[0].id, "job-1");
//! ```

pub mod document;
pub mod error;
pub mod filter;
pub mod hybrid;
pub mod vector;

pub use document::{Document, HybridOptions, Metadata, SearchOptions, SearchResult};
pub use error::{Error, Result};
pub use filter::{Filter, FilterCondition, MetadataFilter};
pub use vector::Vector;
