use crate::config::ApiConfig;
use crate::error::alerts_client::AlertsClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::{AlertFeed, RegionCode};

use std::panic::Location;

use log::{debug, trace};
use reqwest::Client;
use url::Url;

const AREA_QUERY_KEY: &str = "area";

/// HTTP client for the active alerts endpoint.
///
/// One GET per call, no retries. A timeout is only applied when
/// [`ApiConfig::timeout_secs`] is set; otherwise the request waits for the
/// network layer to give up.
#[derive(Clone, Debug)]
pub struct AlertsClient {
    endpoint: Url,
    client: Client,
}

impl AlertsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AlertsClientError> {
        let endpoint = Url::parse(&config.endpoint)?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `<endpoint>?area=<CODE>`
    pub fn alerts_url(&self, region: &RegionCode) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(AREA_QUERY_KEY, region.as_str());
        url
    }

    /// Fetch the active alerts for a region.
    ///
    /// # Errors
    ///
    /// - [`AlertsClientError::Http`] if the request or body read fails
    /// - [`AlertsClientError::Status`] for any non-2xx response
    /// - [`AlertsClientError::Json`] if the body is not an alert feed
    pub async fn fetch_active_alerts(
        &self,
        region: &RegionCode,
    ) -> Result<AlertFeed, AlertsClientError> {
        let url = self.alerts_url(region);
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            return Err(AlertsClientError::Status {
                status,
                message: format!("alerts endpoint rejected area {region}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        trace!("Alerts body for {region}: {} bytes", body.len());

        let feed: AlertFeed = serde_json::from_str(&body)?;
        debug!("Decoded {} alerts for {region}", feed.len());

        Ok(feed)
    }
}
