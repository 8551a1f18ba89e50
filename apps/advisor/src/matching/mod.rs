// Resume-to-job match scoring: vocabulary extraction, skill sets, scoring and advice.

pub mod advice;
pub mod handlers;
pub mod scorer;
pub mod skill_set;
pub mod vocabulary;
