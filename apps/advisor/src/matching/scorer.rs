//! Match Scorer: compares a parsed resume against a job's skill set.
//!
//! `KeywordMatchScorer` is the default backend carried in `AppState` as
//! `Arc<dyn MatchScorer>`. It is pure: no I/O, no shared state, identical
//! output for identical input.
//!
//! Algorithm:
//! 1. Job skills = declared lists ∪ vocabulary hits in the description.
//! 2. Resume skills = declared skills ∪ vocabulary hits in the raw text.
//! 3. No job skills → neutral result (60, Medium).
//! 4. score = round(60 + 35 × coverage − 3 × missing), clamped to [5, 98].

use serde::{Deserialize, Serialize};

use crate::matching::advice::{build_suggestions, neutral_suggestion, tailored_summary};
use crate::matching::skill_set::SkillSet;
use crate::models::job::Job;
use crate::models::resume::ParsedResume;

pub const MIN_SCORE: u32 = 5;
pub const MAX_SCORE: u32 = 98;
const BASELINE: f64 = 60.0;
const COVERAGE_WEIGHT: f64 = 35.0;
const MISSING_PENALTY: f64 = 3.0;
const NEUTRAL_SCORE: u32 = 60;
const HIGH_THRESHOLD: u32 = 75;
const MEDIUM_THRESHOLD: u32 = 55;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    Low,
    Medium,
    High,
}

impl MatchLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            MatchLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }
}

/// Result of comparing one resume against one job. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32,
    pub level: MatchLevel,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub tailored_summary: String,
}

impl MatchResult {
    fn neutral() -> Self {
        MatchResult {
            score: NEUTRAL_SCORE,
            level: MatchLevel::Medium,
            matched_skills: vec![],
            missing_skills: vec![],
            extra_skills: vec![],
            suggestions: vec![neutral_suggestion()],
            tailored_summary: String::new(),
        }
    }
}

/// The match scorer trait. Implement this to swap the heuristic without
/// touching handlers.
///
/// Returns `None` when there is no resume to compare against.
pub trait MatchScorer: Send + Sync {
    fn score(&self, job: &Job, resume: Option<&ParsedResume>) -> Option<MatchResult>;

    /// Short backend label reported to clients.
    fn backend(&self) -> &'static str;
}

/// Vocabulary + declared-skills heuristic.
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, job: &Job, resume: Option<&ParsedResume>) -> Option<MatchResult> {
        compute_match(job, resume)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

pub fn compute_match(job: &Job, resume: Option<&ParsedResume>) -> Option<MatchResult> {
    let resume = resume?;

    let job_skills = SkillSet::for_job(job);
    let resume_skills = SkillSet::for_resume(resume);

    if job_skills.is_empty() {
        return Some(MatchResult::neutral());
    }

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .map(str::to_string)
        .partition(|skill| resume_skills.contains(skill));

    let extra_skills: Vec<String> = resume_skills
        .iter()
        .filter(|skill| !job_skills.contains(skill))
        .map(str::to_string)
        .collect();

    let score = compute_score(matched_skills.len(), missing_skills.len(), job_skills.len());
    let suggestions = build_suggestions(&matched_skills, &missing_skills);

    Some(MatchResult {
        score,
        level: MatchLevel::from_score(score),
        matched_skills,
        missing_skills,
        extra_skills,
        suggestions,
        tailored_summary: tailored_summary(job),
    })
}

/// `total` must be non-zero.
fn compute_score(matched: usize, missing: usize, total: usize) -> u32 {
    let coverage = matched as f64 / total as f64;
    let raw = (BASELINE + coverage * COVERAGE_WEIGHT - missing as f64 * MISSING_PENALTY).round();
    raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Company;

    fn job(skills: &[&str], description: &str) -> Job {
        Job {
            title: "Frontend Engineer".into(),
            company: Some(Company {
                name: "Acme".into(),
                logo: None,
            }),
            description: description.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Job::default()
        }
    }

    fn resume(skills: &[&str]) -> ParsedResume {
        ParsedResume {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..ParsedResume::default()
        }
    }

    fn fixtures() -> Vec<(Job, ParsedResume)> {
        let jobs = vec![
            job(&["React", "Node"], ""),
            job(&[], "Looking for a JavaScript engineer who knows GraphQL, AWS and Docker"),
            job(&["Rust", "Kafka", "Go", "Terraform", "Kubernetes", "Scala"], "distributed systems"),
            job(&["python"], "python python"),
            job(&[" HTML ", "css"], "We care about testing with Jest"),
            job(&[], "we need a generalist"),
        ];
        let resumes = vec![
            resume(&["react", "typescript"]),
            resume(&[]),
            resume(&["Rust", "Kafka", "Go", "Terraform", "Kubernetes", "Scala"]),
            ParsedResume {
                skills: vec!["HTML".into()],
                raw_text: Some("Built REST APIs in Node.js, deployed with Docker".into()),
                ..ParsedResume::default()
            },
            ParsedResume {
                text: Some("Java and Python".into()),
                ..ParsedResume::default()
            },
        ];

        jobs.iter()
            .flat_map(|j| resumes.iter().map(move |r| (j.clone(), r.clone())))
            .collect()
    }

    #[test]
    fn test_reference_example_scores_75_high() {
        let result = compute_match(
            &job(&["React", "Node"], ""),
            Some(&resume(&["react", "typescript"])),
        )
        .unwrap();

        assert_eq!(result.matched_skills, vec!["react"]);
        assert_eq!(result.missing_skills, vec!["node"]);
        assert_eq!(result.extra_skills, vec!["typescript"]);
        assert_eq!(result.score, 75);
        assert_eq!(result.level, MatchLevel::High);
    }

    #[test]
    fn test_no_resume_returns_none() {
        for (job, _) in fixtures() {
            assert!(compute_match(&job, None).is_none());
        }
    }

    #[test]
    fn test_empty_job_skills_returns_neutral() {
        let result = compute_match(&job(&[], "we need a generalist"), Some(&resume(&["react"])))
            .unwrap();

        assert_eq!(result.score, 60);
        assert_eq!(result.level, MatchLevel::Medium);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.extra_skills.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.tailored_summary.is_empty());
    }

    #[test]
    fn test_blank_declared_skills_count_as_one_empty_skill() {
        let result = compute_match(&job(&["  ", ""], ""), Some(&resume(&["react"]))).unwrap();
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, vec![""]);
        assert_eq!(result.extra_skills, vec!["react"]);
        // 60 + 0 - 3
        assert_eq!(result.score, 57);
        assert_eq!(result.level, MatchLevel::Medium);
        assert_eq!(result.suggestions.len(), 3);
        assert!(!result.tailored_summary.is_empty());
    }

    #[test]
    fn test_full_coverage_scores_95() {
        let result = compute_match(
            &job(&["React", "TypeScript"], ""),
            Some(&resume(&["typescript", "REACT"])),
        )
        .unwrap();
        assert_eq!(result.score, 95);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_many_missing_skills_hit_floor() {
        let result = compute_match(
            &job(&["Rust", "Kafka", "Go", "Terraform", "Kubernetes", "Scala", "Elixir", "Haskell"], ""),
            Some(&resume(&[])),
        )
        .unwrap();
        // 60 + 0 - 24 = 36
        assert_eq!(result.score, 36);
        assert_eq!(result.level, MatchLevel::Low);

        let skills: Vec<String> = (0..30).map(|i| format!("skill-{i}")).collect();
        let big = Job {
            skills,
            ..Job::default()
        };
        let result = compute_match(&big, Some(&resume(&[]))).unwrap();
        assert_eq!(result.score, MIN_SCORE);
        assert_eq!(result.level, MatchLevel::Low);
    }

    #[test]
    fn test_description_keywords_join_job_skills() {
        let result = compute_match(
            &job(&[], "We use REACT and Docker"),
            Some(&resume(&["docker"])),
        )
        .unwrap();
        assert_eq!(result.matched_skills, vec!["docker"]);
        assert_eq!(result.missing_skills, vec!["react"]);
        // 60 + 17.5 - 3 = 74.5 → 75
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_java_substring_false_positive_is_kept() {
        let result = compute_match(
            &job(&[], "Senior JavaScript engineer"),
            Some(&resume(&["javascript"])),
        )
        .unwrap();
        assert_eq!(result.matched_skills, vec!["javascript"]);
        assert_eq!(result.missing_skills, vec!["java"]);
    }

    #[test]
    fn test_partition_covers_job_skill_set() {
        for (job, resume) in fixtures() {
            let Some(result) = compute_match(&job, Some(&resume)) else {
                panic!("resume present but no result");
            };
            let job_skills = SkillSet::for_job(&job);
            if job_skills.is_empty() {
                continue;
            }

            let union: SkillSet = result
                .matched_skills
                .iter()
                .chain(&result.missing_skills)
                .collect();
            assert_eq!(union.len(), job_skills.len());
            assert_eq!(
                result.matched_skills.len() + result.missing_skills.len(),
                job_skills.len(),
                "matched and missing must be disjoint"
            );
            for skill in job_skills.iter() {
                assert!(union.contains(skill));
            }
        }
    }

    #[test]
    fn test_extra_skills_are_resume_minus_job() {
        for (job, resume) in fixtures() {
            let result = compute_match(&job, Some(&resume)).unwrap();
            let job_skills = SkillSet::for_job(&job);
            if job_skills.is_empty() {
                continue;
            }
            let resume_skills = SkillSet::for_resume(&resume);
            let expected: Vec<&str> = resume_skills
                .iter()
                .filter(|s| !job_skills.contains(s))
                .collect();
            assert_eq!(result.extra_skills, expected);
        }
    }

    #[test]
    fn test_score_bounded_and_level_consistent() {
        for (job, resume) in fixtures() {
            let result = compute_match(&job, Some(&resume)).unwrap();
            assert!((MIN_SCORE..=MAX_SCORE).contains(&result.score));
            let expected = match result.score {
                s if s >= 75 => MatchLevel::High,
                s if s >= 55 => MatchLevel::Medium,
                _ => MatchLevel::Low,
            };
            assert_eq!(result.level, expected);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for (job, resume) in fixtures() {
            let first = serde_json::to_string(&compute_match(&job, Some(&resume))).unwrap();
            let second = serde_json::to_string(&compute_match(&job, Some(&resume))).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(MatchLevel::from_score(98), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(75), MatchLevel::High);
        assert_eq!(MatchLevel::from_score(74), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_score(55), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_score(54), MatchLevel::Low);
        assert_eq!(MatchLevel::from_score(5), MatchLevel::Low);
    }

    #[test]
    fn test_compute_score_clamps_both_ends() {
        assert_eq!(compute_score(1, 0, 1), 95);
        assert_eq!(compute_score(0, 40, 40), MIN_SCORE);
        assert!(compute_score(0, 0, 1) <= MAX_SCORE);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = compute_match(&job(&["React"], ""), Some(&resume(&["react"]))).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["level"], "High");
        assert!(json.get("matchedSkills").is_some());
        assert!(json.get("tailoredSummary").is_some());
    }

    #[test]
    fn test_keyword_scorer_delegates() {
        let scorer = KeywordMatchScorer;
        assert_eq!(scorer.backend(), "keyword");
        let job = job(&["React", "Node"], "");
        let resume = resume(&["react"]);
        assert_eq!(scorer.score(&job, Some(&resume)), compute_match(&job, Some(&resume)));
    }
}
