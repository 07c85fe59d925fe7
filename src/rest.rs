// rest.rs
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{QuakeError, Result};

/// USGS FDSN event service, single-event query endpoint.
pub const USGS_EVENT_ENDPOINT: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(QuakeError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch a single event by its catalog id in GeoJSON format.
    ///
    /// One GET, no retries. The body is decoded as a generic JSON document;
    /// giving it a shape is the normalizer's job.
    pub async fn fetch_event(&self, event_id: &str) -> Result<Value> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("format", "geojson"), ("eventid", event_id)])
            .send()
            .await
            .map_err(QuakeError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QuakeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        resp.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                QuakeError::Decode(e)
            } else {
                QuakeError::Transport(e)
            }
        })
    }
}
