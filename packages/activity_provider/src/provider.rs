use anyhow::Result;
use pushlog_activity_models::ActivityEvent;

#[async_trait::async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Fetch the user's recent public activity, newest first, exactly as the
    /// source orders it.
    async fn recent_events(&self, username: &str) -> Result<Vec<ActivityEvent>>;

    fn provider_name(&self) -> &str;
}
