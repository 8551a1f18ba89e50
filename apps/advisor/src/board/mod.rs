// Job board plumbing: filtering, pagination, saved-job toggling and scored listings.

pub mod filters;
pub mod handlers;
pub mod pagination;
pub mod saved;
pub mod search;
