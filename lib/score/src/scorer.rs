//! Algorithmic compatibility scorer
//!
//! Pure, deterministic candidate/job scoring with no network access.
//! This is the fallback and baseline path when a generative matcher is
//! unavailable or fails, so it must never error: absent optional fields
//! degrade to their documented neutral defaults.

use crate::explain::{build_explanation, MatchResult};
use crate::profile::{CandidateProfile, JobPosting};

const SKILL_WEIGHT: f32 = 0.5;
const LOCATION_WEIGHT: f32 = 0.2;
const WORK_TYPE_WEIGHT: f32 = 0.2;
const SALARY_WEIGHT: f32 = 0.1;

/// Per-component scores feeding the weighted confidence level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skill_match: f32,
    pub location_match: f32,
    pub work_type_match: f32,
    pub salary_match: f32,
}

impl ComponentScores {
    /// Weighted sum of all components. Weights sum to 1.0.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.skill_match * SKILL_WEIGHT
            + self.location_match * LOCATION_WEIGHT
            + self.work_type_match * WORK_TYPE_WEIGHT
            + self.salary_match * SALARY_WEIGHT
    }
}

/// Deterministic candidate/job compatibility scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score a candidate against a job posting.
    ///
    /// Infallible and deterministic for identical inputs.
    #[must_use]
    pub fn score(&self, candidate: &CandidateProfile, job: &JobPosting) -> MatchResult {
        let matched_skills = matched_skills(&candidate.skills, &job.skills);
        let components = ComponentScores {
            skill_match: skill_match_score(&matched_skills, &job.skills),
            location_match: location_match(
                candidate.location.as_deref(),
                job.location.as_deref(),
            ),
            work_type_match: work_type_match(
                candidate.work_type.as_deref(),
                job.work_type.as_deref(),
            ),
            salary_match: salary_match(candidate.salary_min, job.salary_max),
        };

        let confidence_level = components.confidence();
        let score = (confidence_level * 100.0).round() as u8;
        let explanation = build_explanation(&matched_skills, &components);

        MatchResult {
            confidence_level,
            skill_matches: matched_skills,
            explanation,
            score,
        }
    }
}

/// Candidate skills that match some job skill by case-insensitive
/// bidirectional substring containment.
///
/// The bidirectional rule intentionally catches specializations in both
/// directions ("java" matches "javascript" and vice versa). Matched names
/// are reported lower-cased, deduplicated, in candidate order.
pub fn matched_skills(candidate_skills: &[String], job_skills: &[String]) -> Vec<String> {
    let job_lower: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    for skill in candidate_skills {
        let skill_lower = skill.to_lowercase();
        if matched.contains(&skill_lower) {
            continue;
        }
        let hit = job_lower
            .iter()
            .any(|job_skill| skill_lower.contains(job_skill.as_str()) || job_skill.contains(skill_lower.as_str()));
        if hit {
            matched.push(skill_lower);
        }
    }
    matched
}

/// Fraction of the job's skills covered by matched candidate skills.
///
/// 0.0 when the job lists no skills. Capped at 1.0: the bidirectional
/// containment rule can match more candidate skills than the job lists.
fn skill_match_score(matched: &[String], job_skills: &[String]) -> f32 {
    if job_skills.is_empty() {
        return 0.0;
    }
    (matched.len() as f32 / job_skills.len() as f32).min(1.0)
}

/// 1.0 when the candidate's location contains the job's location
/// (case-insensitive), 0.5 when both present without containment,
/// 0.7 when either is absent.
fn location_match(candidate: Option<&str>, job: Option<&str>) -> f32 {
    match (candidate, job) {
        (Some(c), Some(j)) => {
            if c.to_lowercase().contains(&j.to_lowercase()) {
                1.0
            } else {
                0.5
            }
        }
        _ => 0.7,
    }
}

/// 1.0 when both present and equal (case-insensitive), 0.6 when both
/// present and different, 0.8 when either is absent.
fn work_type_match(candidate: Option<&str>, job: Option<&str>) -> f32 {
    match (candidate, job) {
        (Some(c), Some(j)) => {
            if c.eq_ignore_ascii_case(j) {
                1.0
            } else {
                0.6
            }
        }
        _ => 0.8,
    }
}

/// 0.8 by default; with both bounds present, 1.0 when the candidate's
/// minimum fits under the job's maximum, else 0.3.
fn salary_match(candidate_min: Option<u64>, job_max: Option<u64>) -> f32 {
    match (candidate_min, job_max) {
        (Some(min), Some(max)) => {
            if min <= max {
                1.0
            } else {
                0.3
            }
        }
        _ => 0.8,
    }
}
