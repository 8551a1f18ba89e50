//! Mock resume parsing. No document content is ever read: results are
//! derived from the uploaded file name or are fixed sample data.

use crate::models::resume::ParsedResume;

const DEFAULT_EXPERIENCE_LEVEL: &str = "1–3 years";

/// Guesses skills from a resume file name.
///
/// `react` in the name → React; `ts` or `typescript` → TypeScript; neither → JavaScript.
pub fn parse_by_file_name(file_name: &str) -> ParsedResume {
    let lower = file_name.to_lowercase();
    let mut skills = Vec::new();

    if lower.contains("react") {
        skills.push("React".to_string());
    }
    if lower.contains("ts") || lower.contains("typescript") {
        skills.push("TypeScript".to_string());
    }
    if skills.is_empty() {
        skills.push("JavaScript".to_string());
    }

    ParsedResume {
        skills,
        total_experience_years: Some(1.0),
        inferred_experience_level: Some(DEFAULT_EXPERIENCE_LEVEL.to_string()),
        preferred_locations: vec!["Remote".to_string()],
        ..ParsedResume::default()
    }
}

/// Canned profile returned for any resume upload.
pub fn simulated_upload_resume() -> ParsedResume {
    ParsedResume {
        name: Some("Your Name".to_string()),
        total_experience_years: Some(2.0),
        skills: ["React", "TypeScript", "JavaScript", "HTML", "CSS", "Tailwind"]
            .into_iter()
            .map(String::from)
            .collect(),
        preferred_locations: ["Remote", "Bengaluru", "Noida"]
            .into_iter()
            .map(String::from)
            .collect(),
        inferred_experience_level: Some(DEFAULT_EXPERIENCE_LEVEL.to_string()),
        ..ParsedResume::default()
    }
}
