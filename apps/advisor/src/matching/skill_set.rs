use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::matching::vocabulary::{extract_skills, normalize_skill};
use crate::models::job::Job;
use crate::models::resume::ParsedResume;

/// Insertion-ordered set of normalized skills.
///
/// Order only matters for presentation (chips and suggestion text); membership
/// is exact string equality after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts `skill`. A blank skill normalizes to `""` and
    /// is kept like any other string.
    pub fn insert(&mut self, skill: &str) -> bool {
        let normalized = normalize_skill(skill);
        if self.index.contains(&normalized) {
            return false;
        }
        self.index.insert(normalized.clone());
        self.ordered.push(normalized);
        true
    }

    pub fn extend_normalized<I, S>(&mut self, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in skills {
            self.insert(skill.as_ref());
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.index.contains(&normalize_skill(skill))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Job skill set: every declared list plus keywords found in the description.
    pub fn for_job(job: &Job) -> Self {
        let mut set = Self::new();
        set.extend_normalized(job.declared_skills());
        set.extend_normalized(extract_skills(&job.description));
        set
    }

    /// Resume skill set: declared skills plus keywords found in the raw text.
    pub fn for_resume(resume: &ParsedResume) -> Self {
        let mut set = Self::new();
        set.extend_normalized(&resume.skills);
        set.extend_normalized(extract_skills(resume.raw_text()));
        set
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend_normalized(iter);
        set
    }
}

impl Serialize for SkillSet {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.ordered.serialize(serializer)
    }
}
