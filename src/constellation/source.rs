use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use super::error::FetchError;
use crate::geo::GeoPosition;

/// Supplies the satellite position list for one integer hour.
///
/// Implementations may take as long as their own timeout policy allows, but
/// they must resolve; the cache dispatches each hour at most once per session
/// and never retries.
pub trait SnapshotSource: Send + Sync + 'static {
    fn fetch(&self, hour: u32)
        -> impl Future<Output = Result<Vec<GeoPosition>, FetchError>> + Send;
}

impl<S: SnapshotSource> SnapshotSource for Arc<S> {
    fn fetch(
        &self,
        hour: u32,
    ) -> impl Future<Output = Result<Vec<GeoPosition>, FetchError>> + Send {
        self.as_ref().fetch(hour)
    }
}

/// Fetches `<endpoint>/<2-digit hour>.json`, the upstream wire form: a JSON
/// array of `[lat, lon, alt]` triples. Anything else is a shape error.
pub struct HttpSnapshotSource {
    http: Client,
    endpoint: String,
}

impl HttpSnapshotSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn snapshot_url(&self, hour: u32) -> String {
        format!("{}/{:02}.json", self.endpoint, hour)
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn fetch(
        &self,
        hour: u32,
    ) -> impl Future<Output = Result<Vec<GeoPosition>, FetchError>> + Send {
        async move {
            let url = self.snapshot_url(hour);
            log::debug!("Fetching snapshot from {}", url);

            let response = self.http.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            let triples: Vec<[f64; 3]> = serde_json::from_str(&body)?;
            Ok(triples.into_iter().map(GeoPosition::from_triple).collect())
        }
    }
}
