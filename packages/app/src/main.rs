#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use pushlog_activity::{MAX_ITEMS, select_display_items};
use pushlog_activity_provider::ActivityProvider;
use pushlog_github::GitHubProvider;
use pushlog_widget::{CONTAINER_ID, append_to_container, render_items};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let username = std::env::var("PUSHLOG_USER")
        .map_err(|_| "PUSHLOG_USER environment variable is required")?;
    let author_email = std::env::var("PUSHLOG_AUTHOR_EMAIL")
        .map_err(|_| "PUSHLOG_AUTHOR_EMAIL environment variable is required")?;
    let page_path = std::env::var("PUSHLOG_PAGE").ok();

    let mut github_provider = GitHubProvider::new();
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        github_provider = github_provider.with_token(token);
    }

    let provider: Arc<dyn ActivityProvider> = Arc::new(github_provider);

    // A feed failure must never fail the site build; it only costs the
    // widget its items.
    let events = match provider.recent_events(&username).await {
        Ok(events) => events,
        Err(err) => {
            log::error!(
                "Failed to fetch {} activity for {username}: {err:?}",
                provider.provider_name()
            );
            Vec::new()
        }
    };

    let items = select_display_items(&events, &author_email, MAX_ITEMS);
    log::info!(
        "Selected {} display items from {} feed events",
        items.len(),
        events.len()
    );

    let fragment = render_items(&items);

    let Some(path) = page_path else {
        print!("{fragment}");
        return Ok(());
    };

    if fragment.is_empty() {
        log::warn!("No qualifying activity, leaving {path} untouched");
        return Ok(());
    }

    let page =
        std::fs::read_to_string(&path).map_err(|e| format!("Failed to read {path}: {e}"))?;

    match append_to_container(&page, CONTAINER_ID, &fragment) {
        Ok(updated) => {
            std::fs::write(&path, updated).map_err(|e| format!("Failed to write {path}: {e}"))?;
            log::info!("Appended {} items to #{CONTAINER_ID} in {path}", items.len());
        }
        Err(err) => {
            log::warn!("{err}, leaving {path} untouched");
        }
    }

    Ok(())
}
