pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::board::handlers as board;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/skills/extract", post(matching::handle_extract_skills))
        // Resume API (mock parsing)
        .route("/api/parse-resume", post(resume::handle_parse_resume))
        .route(
            "/api/v1/resumes/upload",
            post(resume::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Job board API
        .route("/api/v1/jobs/search", post(board::handle_search_jobs))
        .route("/api/v1/jobs/saved/toggle", post(board::handle_toggle_saved))
        .with_state(state)
}
