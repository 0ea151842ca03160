//! Hybrid (dense + keyword) ranking
//!
//! Pure ranking math: a sparse keyword-overlap score combined with dense
//! cosine similarity into one ranked list. Used by the vector store's
//! hybrid mode and standalone for ad hoc re-ranking.

use crate::document::{Document, HybridOptions, SearchResult};
use crate::vector::Vector;

/// Extract query terms relevant for keyword scoring.
///
/// Terms are whitespace-split, lower-cased, and must be longer than
/// two characters.
#[inline]
pub fn keyword_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() > 2)
        .collect()
}

/// Fraction of query terms (length > 2) found as case-insensitive
/// substrings of `text`. 0.0 when the query has no such terms.
pub fn keyword_overlap_score(query: &str, text: &str) -> f32 {
    let terms = keyword_terms(query);
    if terms.is_empty() {
        return 0.0;
    }

    let haystack = text.to_lowercase();
    let hits = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
    hits as f32 / terms.len() as f32
}

/// Sort results by score descending; equal scores break ties by
/// document id ascending so rankings are reproducible.
pub fn sort_ranked(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Rank a caller-supplied document set by combined dense + keyword score.
///
/// Per document: `vector_score` is cosine similarity against the query
/// embedding (0.0 when the document has no embedding), `keyword_score`
/// is [`keyword_overlap_score`], and the final score is
/// `vector_score * vector_boost + keyword_score * keyword_boost`.
/// Results below `min_score` are dropped, the rest are sorted descending
/// and truncated to `top_k`.
pub fn rank_hybrid(
    query_embedding: &Vector,
    query_text: &str,
    documents: &[Document],
    options: &HybridOptions,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = documents
        .iter()
        .map(|doc| {
            let vector_score = doc
                .embedding
                .as_ref()
                .map(|e| query_embedding.cosine_similarity(e))
                .unwrap_or(0.0);
            let keyword_score = keyword_overlap_score(query_text, &doc.text);
            let score =
                vector_score * options.vector_boost + keyword_score * options.keyword_boost;
            SearchResult::from_document(doc, score)
        })
        .filter(|r| r.score >= options.min_score)
        .collect();

    sort_ranked(&mut results);
    results.truncate(options.top_k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, text: &str, embedding: Option<Vec<f32>>) -> Document {
        let mut d = Document::new(id, text);
        if let Some(e) = embedding {
            d = d.with_embedding(Vector::new(e));
        }
        d
    }

    #[test]
    fn test_keyword_terms_drops_short_tokens() {
        let terms = keyword_terms("a an the rust engineer");
        assert_eq!(terms, vec!["the", "rust", "engineer"]);
    }

    #[test]
    fn test_keyword_overlap_score() {
        let score = keyword_overlap_score("rust engineer remote", "Senior Rust Engineer (hybrid)");
        // "rust" and "engineer" hit, "remote" does not
        assert!((score - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_keyword_overlap_no_long_terms() {
        assert_eq!(keyword_overlap_score("a b cd", "anything at all"), 0.0);
    }

    #[test]
    fn test_keyword_overlap_case_insensitive() {
        assert_eq!(keyword_overlap_score("RUST", "learn rust today"), 1.0);
    }

    #[test]
    fn test_rank_hybrid_combines_scores() {
        let query = Vector::new(vec![1.0, 0.0]);
        let docs = vec![
            // perfect vector match, no keyword overlap
            doc("a", "unrelated text", Some(vec![1.0, 0.0])),
            // no embedding, full keyword overlap
            doc("b", "rust systems programming", None),
        ];

        let opts = HybridOptions::default();
        let results = rank_hybrid(&query, "rust systems", &docs, &opts);

        assert_eq!(results.len(), 2);
        // 1.0 * 0.7 = 0.7 beats 1.0 * 0.3 = 0.3
        assert_eq!(results[0].id, "a");
        assert!((results[0].score - 0.7).abs() < 1e-6);
        assert!((results[1].score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_rank_hybrid_pure_vector_when_keyword_boost_zero() {
        let query = Vector::new(vec![1.0, 0.0]);
        let docs = vec![
            doc("a", "rust rust rust", Some(vec![0.0, 1.0])),
            doc("b", "nothing in common", Some(vec![1.0, 0.0])),
        ];

        let opts = HybridOptions::default().boosts(1.0, 0.0);
        let results = rank_hybrid(&query, "rust", &docs, &opts);

        // Text content must not influence ranking
        assert_eq!(results[0].id, "b");
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rank_hybrid_truncates_to_top_k() {
        let query = Vector::new(vec![1.0, 0.0]);
        let docs = vec![
            doc("a", "", Some(vec![0.9, 0.1])),
            doc("b", "", Some(vec![0.5, 0.5])),
            doc("c", "", Some(vec![0.7, 0.3])),
        ];

        let opts = HybridOptions::default().top_k(2).boosts(1.0, 0.0);
        let results = rank_hybrid(&query, "", &docs, &opts);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "c");
    }

    #[test]
    fn test_rank_hybrid_min_score() {
        let query = Vector::new(vec![1.0, 0.0]);
        let docs = vec![
            doc("a", "", Some(vec![1.0, 0.0])),
            doc("b", "", Some(vec![0.0, 1.0])),
        ];

        let opts = HybridOptions::default().min_score(0.5).boosts(1.0, 0.0);
        let results = rank_hybrid(&query, "", &docs, &opts);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn test_sort_ranked_tie_break_by_id() {
        let mut results = vec![
            SearchResult::from_document(&doc("b", "", None), 0.5),
            SearchResult::from_document(&doc("a", "", None), 0.5),
            SearchResult::from_document(&doc("c", "", None), 0.9),
        ];
        sort_ranked(&mut results);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
