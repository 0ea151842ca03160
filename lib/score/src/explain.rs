//! Match results and their explanations
//!
//! Output structures for compatibility scoring, with the human-readable
//! explanation sentence and the field normalization applied to results
//! coming back from a generative matcher.

use serde::{Deserialize, Serialize};

use crate::scorer::ComponentScores;

/// Outcome of matching one candidate against one job posting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Overall compatibility in [0, 1]
    #[serde(default)]
    pub confidence_level: f32,
    /// Candidate skills that matched the posting's skills
    #[serde(default)]
    pub skill_matches: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    /// Integer compatibility score in [0, 100]
    #[serde(default)]
    pub score: u8,
}

impl Default for MatchResult {
    fn default() -> Self {
        Self {
            confidence_level: 0.0,
            skill_matches: Vec::new(),
            explanation: String::new(),
            score: 0,
        }
    }
}

impl MatchResult {
    /// Clamp `confidence_level` into [0, 1] and `score` into [0, 100].
    ///
    /// Results produced by the algorithmic scorer already satisfy both
    /// ranges; this normalizes responses from a generative matcher.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.confidence_level = self.confidence_level.clamp(0.0, 1.0);
        self.score = self.score.min(100);
        self
    }
}

/// Build the explanation sentence for an algorithmic match.
///
/// Always reports the skill-match percentage and the matched skill names;
/// appends location, work-type, and salary clauses only when the
/// corresponding component is a perfect match.
pub fn build_explanation(matched_skills: &[String], components: &ComponentScores) -> String {
    let percent = (components.skill_match * 100.0).round() as u32;
    let skills = if matched_skills.is_empty() {
        "none".to_string()
    } else {
        matched_skills.join(", ")
    };

    let mut explanation = format!("Matched {percent}% of required skills ({skills}).");

    if components.location_match == 1.0 {
        explanation.push_str(" Location is a direct match.");
    }
    if components.work_type_match == 1.0 {
        explanation.push_str(" Work type lines up.");
    }
    if components.salary_match == 1.0 {
        explanation.push_str(" Salary expectations fit the posted range.");
    }

    explanation
}
