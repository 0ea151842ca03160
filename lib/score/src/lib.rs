//! # matchvec Score
//!
//! Deterministic candidate/job compatibility scoring.
//!
//! This crate provides the algorithmic matching path of matchvec: a pure
//! function from structured profile and posting fields to a weighted
//! compatibility score with a human-readable explanation. It needs no
//! network access and never fails, which makes it the baseline and the
//! fallback whenever a generative matcher is unavailable.
//!
//! ## Scoring model
//!
//! Four weighted components, weights summing to 1.0:
//!
//! - **Skills** (0.5): bidirectional substring containment over
//!   lower-cased skill names, normalized by the job's skill count
//! - **Location** (0.2): containment of the job location in the
//!   candidate location
//! - **Work type** (0.2): case-insensitive equality
//! - **Salary** (0.1): candidate minimum vs. job maximum
//!
//! ## Example
//!
//! ```rust
//! use matchvec_score::{CandidateProfile, JobPosting, MatchScorer};
//!
//! let candidate = CandidateProfile::new(
//!     vec!["javascript".to_string(), "react".to_string()],
//!     "3 years",
//! );
//! let job = JobPosting::new(
//!     "Frontend Engineer",
//!     "Acme",
//!     vec!["javascript".to_string(), "node".to_string()],
//! );
//!
//! let result = MatchScorer::new().score(&candidate, &job);
//! assert_eq!(result.score, 63);
//! assert_eq!(result.skill_matches, vec!["javascript"]);
//! ```

pub mod explain;
pub mod profile;
pub mod scorer;

pub use explain::MatchResult;
pub use profile::{CandidateProfile, JobPosting};
pub use scorer::{ComponentScores, MatchScorer};
