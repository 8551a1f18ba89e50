//! Human-readable advice attached to a match result.

use crate::models::job::Job;

const NEUTRAL_SUGGESTION: &str = "This job description does not list many specific skills. Focus on tailoring your summary and experience to the role title.";

const HEADLINE_SUGGESTION: &str = "Customize your resume headline to match the job title and mention 2–3 core skills (for example: 'React + TypeScript Frontend Engineer').";

const BULLET_SUGGESTION: &str = "Use bullet points that include action verbs plus metrics (e.g. 'Improved page load speed by 35% by optimizing React components and API calls').";

const DEFAULT_TITLE: &str = "this role";
const DEFAULT_COMPANY: &str = "the company";

/// Display casing for a normalized skill in advice text.
pub fn display_skill(skill: &str) -> String {
    skill.to_uppercase()
}

fn display_list<'a>(skills: impl IntoIterator<Item = &'a str>) -> String {
    skills
        .into_iter()
        .map(display_skill)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The single suggestion returned when a job lists no recognizable skills.
pub fn neutral_suggestion() -> String {
    NEUTRAL_SUGGESTION.to_string()
}

/// Data-derived suggestions first (missing, then matched), generic advice last.
pub fn build_suggestions(matched: &[String], missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(4);

    if !missing.is_empty() {
        suggestions.push(format!(
            "Add or highlight these skills in your resume (if you actually have them): {}.",
            display_list(missing.iter().map(String::as_str))
        ));
    }

    if !matched.is_empty() {
        suggestions.push(format!(
            "Your resume already mentions: {}. Make sure these are visible in the top 1/3 of the page.",
            display_list(matched.iter().map(String::as_str))
        ));
    }

    suggestions.push(HEADLINE_SUGGESTION.to_string());
    suggestions.push(BULLET_SUGGESTION.to_string());
    suggestions
}

/// Boilerplate summary paragraph. Only the role and company are interpolated.
pub fn tailored_summary(job: &Job) -> String {
    let title = if job.title.is_empty() {
        DEFAULT_TITLE
    } else {
        job.title.as_str()
    };
    let company = match job.company_name() {
        "" => DEFAULT_COMPANY,
        name => name,
    };

    format!(
        "Frontend engineer with hands-on experience in modern JavaScript and UI development, \
         applying for a {title} role at {company}. Strong focus on building responsive, accessible, \
         and high-performance interfaces using tools like React, TypeScript and REST APIs. \
         Comfortable collaborating with product and backend teams, writing clean reusable \
         components, and improving UX with data-driven iterations."
    )
}
