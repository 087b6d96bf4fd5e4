#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Selection policy for the recent-activity widget.
//!
//! The feed arrives newest first and is never re-sorted. Selection walks
//! events in feed order, then commits in their order within each push event,
//! keeps commits authored by the configured identity, and stops at the
//! display cap. Everything is pure: same input, same output.

use pushlog_activity_models::{ActivityEvent, DisplayItem};

/// Maximum number of items the widget ever displays.
pub const MAX_ITEMS: usize = 3;

/// Select at most `max_items` display items from `events`.
///
/// Only commits under `PushEvent` entries qualify, and only those whose
/// author email matches `author_email`. Commits with an empty message are
/// skipped rather than rendered as placeholders. Events without commits
/// contribute nothing. Source order is preserved: event order first, commit
/// order within an event second.
#[must_use]
pub fn select_display_items(
    events: &[ActivityEvent],
    author_email: &str,
    max_items: usize,
) -> Vec<DisplayItem> {
    events
        .iter()
        .filter(|event| event.is_push())
        .flat_map(|event| {
            event
                .payload
                .commits
                .iter()
                .map(move |commit| (event, commit))
        })
        .filter(|(_, commit)| commit.author.email == author_email)
        .filter(|(_, commit)| !commit.message.is_empty())
        .map(|(event, commit)| DisplayItem::new(&event.repo.name, event.created_at, &commit.message))
        .take(max_items)
        .collect()
}
