//! Axum route handlers for the Job Board API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::filters::FilterState;
use crate::board::pagination::Page;
use crate::board::saved::SavedJobs;
use crate::board::search::{search_jobs, JobCard, SearchContext};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::job::Job;
use crate::models::lenient;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub jobs: Vec<Job>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub filters: FilterState,
    #[serde(default)]
    pub resume: Option<ParsedResume>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub saved_job_ids: SavedJobs,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSavedRequest {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub saved_job_ids: SavedJobs,
    #[serde(default, deserialize_with = "lenient::string")]
    pub job_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSavedResponse {
    pub saved_job_ids: SavedJobs,
    pub is_saved: bool,
}

/// POST /api/v1/jobs/search
///
/// Filters the posted feed, scores each job against the resume (if any) and
/// returns the requested page.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    AppJson(request): AppJson<SearchRequest>,
) -> Result<Json<Page<JobCard>>, AppError> {
    let page = request.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::Validation("page must be >= 1".to_string()));
    }
    let page_size = request.page_size.unwrap_or(state.config.page_size);
    if page_size == 0 {
        return Err(AppError::Validation("pageSize must be >= 1".to_string()));
    }

    let ctx = SearchContext {
        filters: &request.filters,
        resume: request.resume.as_ref(),
        saved: &request.saved_job_ids,
        now: Utc::now(),
    };
    let result = search_jobs(
        &request.jobs,
        &ctx,
        state.match_scorer.as_ref(),
        page,
        page_size,
    );

    debug!(
        feed = request.jobs.len(),
        filtered = !request.filters.is_empty(),
        matched = result.total_items,
        page = result.page,
        "Job search"
    );
    Ok(Json(result))
}

/// POST /api/v1/jobs/saved/toggle
pub async fn handle_toggle_saved(
    AppJson(mut request): AppJson<ToggleSavedRequest>,
) -> Result<Json<ToggleSavedResponse>, AppError> {
    if request.job_id.trim().is_empty() {
        return Err(AppError::Validation("jobId cannot be empty".to_string()));
    }
    let is_saved = request.saved_job_ids.toggle(&request.job_id);
    debug!(
        job_id = %request.job_id,
        is_saved,
        saved = request.saved_job_ids.ids().len(),
        "Toggled saved job"
    );
    Ok(Json(ToggleSavedResponse {
        saved_job_ids: request.saved_job_ids,
        is_saved,
    }))
}
