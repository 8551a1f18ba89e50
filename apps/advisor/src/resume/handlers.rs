//! Axum route handlers for the mock Resume API.

use axum::extract::Multipart;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::lenient;
use crate::models::resume::ParsedResume;
use crate::resume::mock_parser::{parse_by_file_name, simulated_upload_resume};

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeRequest {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub file_name: Option<String>,
}

/// POST /api/parse-resume
///
/// Returns skills guessed from the file name. The document itself is never sent.
pub async fn handle_parse_resume(
    AppJson(request): AppJson<ParseResumeRequest>,
) -> Json<ParsedResume> {
    let file_name = request.file_name.unwrap_or_default();
    let resume = parse_by_file_name(&file_name);
    debug!(file_name = %file_name, skills = ?resume.skills, "Parsed resume by file name");
    Json(resume)
}

/// POST /api/v1/resumes/upload
///
/// Accepts a multipart `file` field and returns the simulated parse result.
pub async fn handle_upload_resume(mut multipart: Multipart) -> Result<Json<ParsedResume>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let size = field.bytes().await?.len();
        if size == 0 {
            warn!(file_name = %file_name, "Rejected empty resume upload");
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }

        debug!(file_name = %file_name, size, "Mock parsed uploaded resume");
        return Ok(Json(simulated_upload_resume()));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}
