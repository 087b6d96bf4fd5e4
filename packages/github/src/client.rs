use anyhow::Result;
use pushlog_activity_models::ActivityEvent;
use pushlog_activity_provider::ActivityProvider;

pub struct GitHubProvider {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    base_url: String,
}

impl GitHubProvider {
    /// Create a new GitHub provider without authentication.
    ///
    /// # Panics
    ///
    /// * If the `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("Pushlog")
            .build()
            .unwrap();
        Self {
            http_client,
            auth_token: None,
            base_url: "https://api.github.com".to_string(),
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn send_events_request(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self
            .http_client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        request.send().await
    }
}

impl Default for GitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ActivityProvider for GitHubProvider {
    async fn recent_events(&self, username: &str) -> Result<Vec<ActivityEvent>> {
        let url = format!("{}/users/{}/events/public", self.base_url, username);
        log::debug!("GET {url}");

        // One transparent retry after a transport-level failure. HTTP error
        // statuses are not retried.
        let response = match self.send_events_request(&url).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("GitHub request failed, retrying once: {err}");
                self.send_events_request(&url).await?
            }
        };

        let status = response.status();

        if !status.is_success() {
            log::error!("GitHub API error: {}", response.text().await?);
            anyhow::bail!("GitHub API error: {status}");
        }

        let events_data: Vec<serde_json::Value> = response.json().await?;

        Ok(events_data.iter().filter_map(parse_event).collect())
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}

/// Decode one feed element, skipping shapes this crate does not model.
fn parse_event(value: &serde_json::Value) -> Option<ActivityEvent> {
    match serde_json::from_value(value.clone()) {
        Ok(event) => Some(event),
        Err(err) => {
            log::debug!("Skipping undecodable feed element: {err}");
            None
        }
    }
}
