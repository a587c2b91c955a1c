use std::time::Duration;

use reqwest::Client;

use super::error::FeedError;
use super::types::EventFeed;

const WILDFIRE_CATEGORY: &str = "wildfires";

/// Client for the wildfire event feed. The feed is consumed once per
/// session; callers memoize the normalized result rather than re-fetching.
pub struct WildfireClient {
    http: Client,
    endpoint: String,
    days: Option<u32>,
}

impl WildfireClient {
    pub fn new(endpoint: &str, days: Option<u32>, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            days,
        })
    }

    pub async fn fetch_events(&self) -> Result<EventFeed, FeedError> {
        let mut request = self
            .http
            .get(&self.endpoint)
            .query(&[("category", WILDFIRE_CATEGORY)]);
        if let Some(days) = self.days {
            request = request.query(&[("days", days.to_string())]);
        }

        log::info!("Fetching wildfire events from {}", self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
