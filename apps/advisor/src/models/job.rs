use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub logo: Option<String>,
}

/// A job listing as delivered by the remote listings feed.
///
/// Every field is defaulted so partially populated feed records still
/// deserialize; `null` or mistyped values fall back the same way. The scorer
/// treats missing text as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "company")]
    pub company: Option<Company>,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub job_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub work_mode: String,
    #[serde(deserialize_with = "lenient::string")]
    pub experience_level: String,
    #[serde(deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_number")]
    pub salary_min: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_number")]
    pub salary_max: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient::opt_datetime")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub apply_url: Option<String>,
}

/// Accepts a company object or a bare company name.
fn company<'de, D>(deserializer: D) -> Result<Option<Company>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        obj @ Value::Object(_) => serde_json::from_value(obj).ok(),
        Value::String(name) => Some(Company { name, logo: None }),
        _ => None,
    })
}

impl Job {
    pub fn company_name(&self) -> &str {
        self.company.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// All declared skill lists, general first, then required, then nice-to-have.
    pub fn declared_skills(&self) -> impl Iterator<Item = &String> {
        self.skills
            .iter()
            .chain(&self.required_skills)
            .chain(&self.nice_to_have_skills)
    }

    /// Best known salary figure: the upper bound when present, else the lower one.
    pub fn best_salary(&self) -> Option<f64> {
        self.salary_max.or(self.salary_min)
    }
}
