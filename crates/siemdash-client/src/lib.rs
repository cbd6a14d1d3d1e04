//! HTTP client for the dashboard analytics backend.
//!
//! [`DashboardSource`] is the I/O seam between the sync engine and the
//! backend: one round trip to fetch statistics and alerts for a time
//! range, one to submit an alert resolution. [`ApiClient`] is the
//! reqwest-backed production implementation; tests substitute mocks.

pub mod error;

use async_trait::async_trait;
use error::{ClientError, Result};
use siemdash_common::types::{DashboardPayload, TimeRange};
use std::time::Duration;

/// Remote source of dashboard state. Pure I/O boundary, no policy:
/// callers decide what to do with failures and partial payloads.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch current statistics and alerts for the given time range.
    /// A non-success status is an error, same as a transport failure.
    async fn fetch_dashboard(&self, range: TimeRange) -> Result<DashboardPayload>;

    /// Tell the backend an alert was resolved. Returns the HTTP status
    /// for any completed round trip, including non-2xx; errors only when
    /// the request itself could not complete.
    async fn submit_resolution(&self, alert_id: &str) -> Result<u16>;
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn fetch_dashboard(&self, range: TimeRange) -> Result<DashboardPayload> {
        let url = format!("{}/api/v1/dashboard", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("range", range.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload = serde_json::from_slice(&body)?;
        Ok(payload)
    }

    async fn submit_resolution(&self, alert_id: &str) -> Result<u16> {
        let url = format!("{}/api/v1/alerts/{alert_id}/resolve", self.base_url);
        let response = self.client.patch(&url).send().await?;
        Ok(response.status().as_u16())
    }
}
