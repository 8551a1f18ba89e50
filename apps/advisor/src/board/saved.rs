use serde::{Deserialize, Serialize};

/// Bookmarked job ids, in the order they were saved. Lives only as long as
/// the client keeps sending it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedJobs(Vec<String>);

impl SavedJobs {
    pub fn contains(&self, job_id: &str) -> bool {
        self.0.iter().any(|id| id == job_id)
    }

    /// Saves the job if absent, unsaves it if present. Returns whether it is now saved.
    pub fn toggle(&mut self, job_id: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|id| id == job_id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(job_id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for SavedJobs {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut saved = SavedJobs::default();
        for id in iter {
            if !saved.contains(&id) {
                saved.0.push(id);
            }
        }
        saved
    }
}
