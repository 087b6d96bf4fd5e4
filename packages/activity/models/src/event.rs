use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event type tag that marks a push to a repository. The only tag the
/// widget derives display items from.
pub const PUSH_EVENT: &str = "PushEvent";

/// One unit from a user's public activity feed.
///
/// The feed carries many event shapes; only the fields the widget needs are
/// modeled here, and decoding must tolerate any superset of fields. Events
/// without a `payload.commits` array (anything that is not a push) decode
/// with an empty commit list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: EventPayload,
}

impl ActivityEvent {
    /// Returns `true` if this event represents commits pushed to a repository.
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.event_type == PUSH_EVENT
    }
}

/// Repository an event happened in, in `owner/repo` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_push() {
        let event = ActivityEvent {
            event_type: PUSH_EVENT.to_string(),
            created_at: "2020-01-01T00:00:00Z".parse().unwrap(),
            repo: EventRepo {
                name: "a/b".to_string(),
            },
            payload: EventPayload::default(),
        };
        assert!(event.is_push());

        let event = ActivityEvent {
            event_type: "WatchEvent".to_string(),
            ..event
        };
        assert!(!event.is_push());
    }
}
