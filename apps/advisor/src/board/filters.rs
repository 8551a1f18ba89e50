use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::Job;
use crate::models::lenient::null_as_default;

/// Search and sidebar filters. Empty strings, `null` and `None` mean "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    #[serde(deserialize_with = "null_as_default")]
    pub keyword: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub job_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub work_mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_level: String,
    pub min_salary: Option<u64>,
    pub posted_within_days: Option<u32>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn matches(&self, job: &Job, now: DateTime<Utc>) -> bool {
        self.matches_keyword(job)
            && contains_ci(&job.location, &self.location)
            && equals_ci(&job.job_type, &self.job_type)
            && equals_ci(&job.work_mode, &self.work_mode)
            && equals_ci(&job.experience_level, &self.experience_level)
            && self.matches_salary(job)
            && self.matches_recency(job, now)
    }

    fn matches_keyword(&self, job: &Job) -> bool {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return true;
        }
        contains_ci(&job.title, keyword)
            || contains_ci(job.company_name(), keyword)
            || contains_ci(&job.description, keyword)
            || job.declared_skills().any(|s| contains_ci(s, keyword))
    }

    fn matches_salary(&self, job: &Job) -> bool {
        match self.min_salary {
            None => true,
            Some(min) => job.best_salary().is_some_and(|salary| salary >= min as f64),
        }
    }

    fn matches_recency(&self, job: &Job, now: DateTime<Utc>) -> bool {
        match self.posted_within_days {
            None => true,
            Some(days) => job
                .posted_at
                .is_some_and(|posted| posted >= now - Duration::days(i64::from(days))),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn equals_ci(value: &str, wanted: &str) -> bool {
    let wanted = wanted.trim();
    wanted.is_empty() || value.trim().to_lowercase() == wanted.to_lowercase()
}

/// Keeps the jobs that pass every filter, in feed order.
pub fn filter_jobs<'a>(jobs: &'a [Job], filters: &FilterState, now: DateTime<Utc>) -> Vec<&'a Job> {
    jobs.iter().filter(|job| filters.matches(job, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Company;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn jobs() -> Vec<Job> {
        vec![
            Job {
                id: "1".into(),
                title: "Frontend Engineer".into(),
                company: Some(Company {
                    name: "Acme".into(),
                    logo: None,
                }),
                location: "Remote - Europe".into(),
                job_type: "Full-time".into(),
                work_mode: "Remote".into(),
                experience_level: "Mid".into(),
                skills: vec!["React".into()],
                salary_min: Some(60000.0),
                salary_max: Some(90000.0),
                posted_at: Some(Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0).unwrap()),
                ..Job::default()
            },
            Job {
                id: "2".into(),
                title: "Data Engineer".into(),
                company: Some(Company {
                    name: "Globex".into(),
                    logo: None,
                }),
                location: "Bengaluru".into(),
                job_type: "Contract".into(),
                work_mode: "Hybrid".into(),
                experience_level: "Senior".into(),
                description: "Pipelines in Python".into(),
                posted_at: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
                ..Job::default()
            },
            Job {
                id: "3".into(),
                title: "Support Specialist".into(),
                work_mode: "remote".into(),
                salary_min: Some(40000.0),
                ..Job::default()
            },
        ]
    }

    fn ids(filtered: &[&Job]) -> Vec<String> {
        filtered.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything_in_order() {
        let jobs = jobs();
        let filters = FilterState::default();
        assert!(filters.is_empty());
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_keyword_searches_title_company_description_skills() {
        let jobs = jobs();
        let by = |kw: &str| {
            let filters = FilterState {
                keyword: kw.into(),
                ..FilterState::default()
            };
            ids(&filter_jobs(&jobs, &filters, now()))
        };
        assert_eq!(by("engineer"), vec!["1", "2"]);
        assert_eq!(by("GLOBEX"), vec!["2"]);
        assert_eq!(by("python"), vec!["2"]);
        assert_eq!(by("react"), vec!["1"]);
        assert_eq!(by("  "), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_location_and_exact_fields() {
        let jobs = jobs();
        let filters = FilterState {
            location: "remote".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1"]);

        let filters = FilterState {
            work_mode: "Remote".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1", "3"]);

        let filters = FilterState {
            job_type: "contract".into(),
            experience_level: "senior".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["2"]);
    }

    #[test]
    fn test_exact_fields_fold_non_ascii_case() {
        let jobs = vec![Job {
            id: "9".into(),
            job_type: "PRÁCTICAS".into(),
            experience_level: "Débutant".into(),
            ..Job::default()
        }];
        let filters = FilterState {
            job_type: "prácticas".into(),
            experience_level: "DÉBUTANT".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["9"]);
    }

    #[test]
    fn test_null_filters_mean_any() {
        let filters: FilterState =
            serde_json::from_str(r#"{"keyword": null, "workMode": null}"#).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_min_salary_uses_best_known_figure() {
        let jobs = jobs();
        let filters = FilterState {
            min_salary: Some(80000),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1"]);

        let filters = FilterState {
            min_salary: Some(40000),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1", "3"]);
    }

    #[test]
    fn test_posted_within_days_drops_old_and_undated() {
        let jobs = jobs();
        let filters = FilterState {
            posted_within_days: Some(7),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter_jobs(&jobs, &filters, now())), vec!["1"]);
    }
}
