use async_trait::async_trait;
use reqwest::Client;
pub use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::model::WeatherResponse;

/// WeatherAPI.com forecast endpoint.
pub const FORECAST_URL: &str = "http://api.weatherapi.com/v1/forecast.json";

/// The API caps free-tier forecasts at 3 days; the report indexes into them.
pub const FORECAST_DAYS: u8 = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fatal conditions on the fetch path. Each one aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Transport(reqwest::Error),

    #[error("weather service unavailable (HTTP {status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to read the weather service response body: {0}")]
    Body(reqwest::Error),

    #[error("failed to parse the weather service JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a forecast for a location query.
///
/// The CLI wires in [`WeatherApiClient`]; tests substitute canned sources.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_forecast(&self, location: &str) -> Result<WeatherResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { api_key, http })
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    async fn fetch_forecast(&self, location: &str) -> Result<WeatherResponse, FetchError> {
        let days = FORECAST_DAYS.to_string();

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Body)?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WeatherResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
