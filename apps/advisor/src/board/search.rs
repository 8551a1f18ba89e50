//! Job list assembly: filter the feed, attach match scores and saved flags, paginate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::filters::{filter_jobs, FilterState};
use crate::board::pagination::{paginate, Page};
use crate::board::saved::SavedJobs;
use crate::matching::scorer::{MatchLevel, MatchScorer};
use crate::models::job::Job;
use crate::models::resume::ParsedResume;

/// A job as shown in the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: Option<u32>,
    pub match_label: Option<MatchLevel>,
    pub is_saved: bool,
}

/// Everything a search needs; borrowed from the caller's application state.
pub struct SearchContext<'a> {
    pub filters: &'a FilterState,
    pub resume: Option<&'a ParsedResume>,
    pub saved: &'a SavedJobs,
    pub now: DateTime<Utc>,
}

pub fn search_jobs(
    jobs: &[Job],
    ctx: &SearchContext<'_>,
    scorer: &dyn MatchScorer,
    page: usize,
    page_size: usize,
) -> Page<JobCard> {
    let cards = filter_jobs(jobs, ctx.filters, ctx.now)
        .into_iter()
        .map(|job| {
            let result = scorer.score(job, ctx.resume);
            JobCard {
                match_score: result.as_ref().map(|m| m.score),
                match_label: result.as_ref().map(|m| m.level),
                is_saved: ctx.saved.contains(&job.id),
                job: job.clone(),
            }
        })
        .collect();

    paginate(cards, page, page_size)
}
