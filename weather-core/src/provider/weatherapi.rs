use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{model::WeatherResult, provider::truncate_body};

use super::ForecastProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_forecast(&self, city: &str, days: u32) -> Result<Value> {
        let url = format!("{}/v1/forecast.json", self.base_url);

        debug!(city, days, "requesting WeatherAPI forecast");

        let days = days.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("alerts", "yes"),
                ("aqi", "yes"),
            ])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (forecast)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI forecast response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI forecast request failed with status {}: {}",
                status,
                upstream_message(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse WeatherAPI forecast JSON")
    }
}

/// Error envelope WeatherAPI.com uses for 4xx answers.
#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaError,
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<WaErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => truncate_body(body),
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn forecast(&self, city: &str, days: u32) -> Result<WeatherResult> {
        self.fetch_forecast(city, days).await.map(WeatherResult)
    }
}
