use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The rendered, user-facing unit derived from one qualifying commit of a
/// push event.
///
/// `repo_url` and `date` are derived at construction: the url points at the
/// repository on github.com and the date is the calendar day of the push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub repo_name: String,
    pub repo_url: String,
    pub date: NaiveDate,
    pub message: String,
}

impl DisplayItem {
    #[must_use]
    pub fn new(repo_name: &str, pushed_at: DateTime<Utc>, message: &str) -> Self {
        Self {
            repo_url: format!("https://github.com/{repo_name}"),
            repo_name: repo_name.to_string(),
            date: pushed_at.date_naive(),
            message: message.to_string(),
        }
    }
}
