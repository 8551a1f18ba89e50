use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{KeywordMatchScorer, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-user data: jobs, resumes and saved ids arrive with each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            match_scorer: Arc::new(KeywordMatchScorer),
        }
    }
}
