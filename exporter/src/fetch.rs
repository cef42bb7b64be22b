use crate::errors::{Error, Result};
use crate::model::DeviceReading;
use reqwest::header;

/// Production AirGradient cloud API host.
pub const DEFAULT_API_URL: &str = "https://api.airgradient.com";

const MEASURES_PATH: &str = "/public/api/v1/locations/measures/current";

/// Client for the AirGradient cloud API, authenticated by a location token.
#[derive(Debug, Clone)]
pub struct AirGradientClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl AirGradientClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fetches the latest measurement snapshot for every monitor visible to
    /// the configured token. One request, no retries.
    pub async fn current_measures(&self) -> Result<Vec<DeviceReading>> {
        let url = format!("{}{}", self.base_url, MEASURES_PATH);
        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamUnavailable {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let readings = serde_json::from_str(&body)?;
        Ok(readings)
    }
}
