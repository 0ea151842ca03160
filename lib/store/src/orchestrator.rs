//! Match orchestration
//!
//! Tries a configured generative matcher first and falls back to the
//! deterministic algorithmic scorer on absence or any failure. Match
//! generation never fails outright: the one place where errors are
//! intentionally invisible to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use matchvec_core::Result;
use matchvec_score::{CandidateProfile, JobPosting, MatchResult, MatchScorer};

/// Contract for an external generative matching service.
///
/// Implementations wrap whatever model endpoint produces structured
/// match responses; only the shape is fixed here.
#[async_trait]
pub trait GenerativeMatcher: Send + Sync {
    async fn generate_match(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<MatchResult>;
}

pub struct MatchOrchestrator {
    generative: Option<Arc<dyn GenerativeMatcher>>,
    scorer: MatchScorer,
}

impl MatchOrchestrator {
    /// Orchestrator with no generative matcher: always algorithmic.
    #[must_use]
    pub fn algorithmic_only() -> Self {
        Self {
            generative: None,
            scorer: MatchScorer::new(),
        }
    }

    #[must_use]
    pub fn with_generative(generative: Arc<dyn GenerativeMatcher>) -> Self {
        Self {
            generative: Some(generative),
            scorer: MatchScorer::new(),
        }
    }

    /// Produce a match result for the pair. Infallible: a missing or
    /// failing generative matcher degrades to the algorithmic scorer.
    /// Generative responses are clamped into their documented ranges.
    pub async fn match_candidate(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
    ) -> MatchResult {
        match &self.generative {
            None => {
                debug!("no generative matcher configured, using algorithmic scorer");
                self.scorer.score(candidate, job)
            }
            Some(generative) => match generative.generate_match(candidate, job).await {
                Ok(result) => result.clamped(),
                Err(err) => {
                    warn!(error = %err, "generative match failed, falling back to algorithmic scorer");
                    self.scorer.score(candidate, job)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchvec_core::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingMatcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerativeMatcher for FailingMatcher {
        async fn generate_match(
            &self,
            _candidate: &CandidateProfile,
            _job: &JobPosting,
        ) -> Result<MatchResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Network("model endpoint down".to_string()))
        }
    }

    struct OutOfRangeMatcher;

    #[async_trait]
    impl GenerativeMatcher for OutOfRangeMatcher {
        async fn generate_match(
            &self,
            _candidate: &CandidateProfile,
            _job: &JobPosting,
        ) -> Result<MatchResult> {
            Ok(MatchResult {
                confidence_level: 3.5,
                skill_matches: vec!["rust".to_string()],
                explanation: "great fit".to_string(),
                score: 200,
            })
        }
    }

    struct CountingMatcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerativeMatcher for CountingMatcher {
        async fn generate_match(
            &self,
            _candidate: &CandidateProfile,
            _job: &JobPosting,
        ) -> Result<MatchResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MatchResult {
                confidence_level: 0.9,
                skill_matches: vec![],
                explanation: "generative".to_string(),
                score: 90,
            })
        }
    }

    fn pair() -> (CandidateProfile, JobPosting) {
        (
            CandidateProfile::new(
                vec!["javascript".to_string(), "react".to_string()],
                "3 years",
            ),
            JobPosting::new(
                "Engineer",
                "Acme",
                vec!["javascript".to_string(), "node".to_string()],
            ),
        )
    }

    #[tokio::test]
    async fn test_no_generative_uses_algorithmic_result() {
        let (candidate, job) = pair();
        let orchestrator = MatchOrchestrator::algorithmic_only();

        let result = orchestrator.match_candidate(&candidate, &job).await;
        let direct = MatchScorer::new().score(&candidate, &job);

        assert_eq!(result.score, direct.score);
        assert_eq!(result.confidence_level, direct.confidence_level);
        assert_eq!(result.explanation, direct.explanation);
    }

    #[tokio::test]
    async fn test_failure_falls_back_without_error() {
        let (candidate, job) = pair();
        let matcher = Arc::new(FailingMatcher {
            calls: AtomicUsize::new(0),
        });
        let orchestrator = MatchOrchestrator::with_generative(matcher.clone());

        let result = orchestrator.match_candidate(&candidate, &job).await;

        assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
        // algorithmic result for this pair
        assert_eq!(result.score, 63);
    }

    #[tokio::test]
    async fn test_generative_response_is_clamped() {
        let (candidate, job) = pair();
        let orchestrator = MatchOrchestrator::with_generative(Arc::new(OutOfRangeMatcher));

        let result = orchestrator.match_candidate(&candidate, &job).await;

        assert_eq!(result.confidence_level, 1.0);
        assert_eq!(result.score, 100);
        assert_eq!(result.skill_matches, vec!["rust"]);
    }

    #[tokio::test]
    async fn test_generative_success_is_returned() {
        let (candidate, job) = pair();
        let matcher = Arc::new(CountingMatcher {
            calls: AtomicUsize::new(0),
        });
        let orchestrator = MatchOrchestrator::with_generative(matcher.clone());

        let result = orchestrator.match_candidate(&candidate, &job).await;

        assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.score, 90);
        assert_eq!(result.explanation, "generative");
    }
}
