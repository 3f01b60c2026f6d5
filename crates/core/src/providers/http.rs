use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::change_point::ChangePoint;
use crate::models::event::Event;
use crate::models::price::PricePoint;
use crate::models::settings::DashboardSettings;
use crate::models::view::DateRange;
use super::decode::{decode_prices, decode_records};
use super::traits::DashboardSource;

/// Dashboard API over HTTP.
///
/// - `GET {base}/historical?start=YYYY-MM-DD&end=YYYY-MM-DD` → price series
/// - `GET {base}/events` → every event
/// - `GET {base}/changepoints` → every change point
///
/// Bodies are JSON arrays; each record is validated on the way in.
pub struct HttpDashboardSource {
    client: Client,
    base_url: String,
}

impl HttpDashboardSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, 30)
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::with_timeout(settings.api_base_url.clone(), settings.request_timeout_secs)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the body of a successful response.
    async fn get_body(
        &self,
        dataset: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, CoreError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(dataset, url = %url, "Fetching dataset");

        let resp = self.client.get(&url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                dataset: dataset.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        Ok(resp.text().await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardSource for HttpDashboardSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_prices(&self, range: &DateRange) -> Result<Vec<PricePoint>, CoreError> {
        let query = [("start", range.start.to_string()), ("end", range.end.to_string())];
        let body = self.get_body("prices", "historical", &query).await?;
        decode_prices(&body)
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, CoreError> {
        let body = self.get_body("events", "events", &[]).await?;
        decode_records("events", &body)
    }

    async fn fetch_change_points(&self) -> Result<Vec<ChangePoint>, CoreError> {
        let body = self.get_body("change_points", "changepoints", &[]).await?;
        decode_records("change_points", &body)
    }
}
