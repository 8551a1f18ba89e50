use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Structured output of resume parsing.
///
/// `raw_text` and `text` both carry free-form extracted resume text; the
/// scorer reads `raw_text` first and only falls back to `text` when it is absent.
/// Loosely typed or `null` fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedResume {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_number"
    )]
    pub total_experience_years: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub inferred_experience_level: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub preferred_locations: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub raw_text: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub text: Option<String>,
}

impl ParsedResume {
    pub fn raw_text(&self) -> &str {
        self.raw_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }
}
