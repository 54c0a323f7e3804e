use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::{Outcome, WeatherRecord},
};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "http://api.weatherapi.com/v1/current.json";

/// Client for the WeatherAPI.com current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key, endpoint: DEFAULT_ENDPOINT.to_string(), http: Client::new() }
    }

    /// Point the client at a different current-conditions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        debug!(city, endpoint = %self.endpoint, "requesting current conditions");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Body)?;

        if status != StatusCode::OK {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn fetch(&self, city: &str) -> Outcome {
        match self.fetch_current(city).await {
            Ok(record) => {
                debug!(city = %record.city, condition = %record.condition_text, "current conditions received");
                Outcome::Success(record)
            }
            Err(err) => {
                let kind = err.kind();
                warn!(%kind, error = %err, "weather unavailable");
                Outcome::Unavailable(kind)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherRecord {
    fn from(res: WaResponse) -> Self {
        WeatherRecord {
            city: res.location.name,
            country: res.location.country,
            temperature_celsius: res.current.temp_c,
            condition_text: res.current.condition.text,
            condition_icon_url: res.current.condition.icon,
            humidity_percent: res.current.humidity,
            wind_speed_kph: res.current.wind_kph,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
