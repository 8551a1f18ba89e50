//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::AppJson;
use crate::matching::scorer::MatchResult;
use crate::matching::vocabulary::extract_skills;
use crate::models::job::Job;
use crate::models::lenient;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub job: Job,
    #[serde(default)]
    pub resume: Option<ParsedResume>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    /// `null` when no resume was supplied; clients show the upload prompt.
    #[serde(rename = "match")]
    pub result: Option<MatchResult>,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Json<MatchResponse> {
    let result = state
        .match_scorer
        .score(&request.job, request.resume.as_ref());

    match &result {
        Some(m) => debug!(job_id = %request.job.id, score = m.score, level = ?m.level, "Computed match"),
        None => debug!(job_id = %request.job.id, "No resume supplied; match unavailable"),
    }

    Json(MatchResponse {
        result,
        scorer_backend: state.match_scorer.backend(),
    })
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    AppJson(request): AppJson<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: extract_skills(&request.text),
    })
}
