use crate::{Config, Outcome, provider::weatherapi::WeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions. Implementations never fail: every fault is
/// folded into [`Outcome::Unavailable`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `city`. No caching, no retry.
    async fn fetch(&self, city: &str) -> Outcome;
}

/// Construct the WeatherAPI.com client from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for WeatherAPI.com.\n\
             Hint: run `mausam configure` or set the {} environment variable.",
            crate::config::API_KEY_ENV
        )
    })?;

    let mut client = WeatherClient::new(api_key);
    if let Some(endpoint) = config.endpoint.as_deref() {
        client = client.with_endpoint(endpoint);
    }

    Ok(Box::new(client))
}
