//! Keyword vocabulary and free-text skill extraction.
//!
//! Detection is plain substring containment on the lowercased text: no
//! tokenization, no word boundaries, no stemming. `"java"` therefore matches
//! inside `"javascript"` and `"rest"` inside `"interested"`. Callers relying on
//! exact skills should use the declared skill lists instead.

/// Fixed, ordered vocabulary scanned for in job descriptions and resume text.
pub const KNOWN_SKILL_KEYWORDS: &[&str] = &[
    "react",
    "reactjs",
    "typescript",
    "javascript",
    "node",
    "node.js",
    "next.js",
    "nextjs",
    "tailwind",
    "redux",
    "html",
    "css",
    "rest",
    "api",
    "graphql",
    "aws",
    "docker",
    "jest",
    "testing",
    "python",
    "java",
];

/// Lowercases and trims a skill. Skills compare equal iff their normalized forms do.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns every vocabulary keyword found in `text`, once each, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();

    KNOWN_SKILL_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}
