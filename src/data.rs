// src/data.rs
//
// The one record type the pipeline produces. The extractor fills the four
// text fields; `skills` stays `None` until the matcher has run.

use serde::{Deserialize, Serialize};

use crate::config::consts::HEADERS;
use crate::skills;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Option<String>,
}

impl JobRecord {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
            skills: None,
        }
    }

    /// Fill `skills` from the description using the given vocabulary.
    pub fn with_skills(mut self, vocab: &[&str]) -> Self {
        self.skills = Some(skills::match_skills(&self.description, vocab));
        self
    }

    /// Cell values in `HEADERS` order, for table display.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.description,
            self.skills.as_deref().unwrap_or(""),
        ]
    }

    pub fn headers() -> &'static [&'static str; 5] {
        &HEADERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::SKILLS;

    #[test]
    fn skills_unset_until_matched() {
        let rec = JobRecord::new("Dev", "Acme", "Remote", "Django and React");
        assert_eq!(rec.skills, None);
        assert_eq!(rec.cells()[4], "");

        let rec = rec.with_skills(SKILLS);
        assert_eq!(rec.skills.as_deref(), Some("react, django"));
        assert_eq!(rec.cells(), ["Dev", "Acme", "Remote", "Django and React", "react, django"]);
    }
}
