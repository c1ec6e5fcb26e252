use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProxyError;

/// Image returned when the photo search comes back empty.
pub const FALLBACK_IMAGE_URL: &str = "https://source.unsplash.com/1600x900/?nature";

/// Forecast length used when the caller does not ask for one.
pub const DEFAULT_FORECAST_DAYS: u32 = 1;

/// Forecast length of the weekly endpoint.
pub const WEEK_FORECAST_DAYS: u32 = 7;

/// A location lookup as received from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub days: u32,
    pub condition: Option<String>,
}

impl LocationQuery {
    /// Build a query for `city`, rejecting blank names.
    pub fn new(city: impl Into<String>) -> Result<Self, ProxyError> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(ProxyError::validation("Missing city parameter"));
        }

        Ok(Self {
            city,
            days: DEFAULT_FORECAST_DAYS,
            condition: None,
        })
    }

    /// Set the forecast length; zero keeps the default.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = if days == 0 { DEFAULT_FORECAST_DAYS } else { days };
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        let condition = condition.into();
        self.condition = (!condition.trim().is_empty()).then_some(condition);
        self
    }

    /// Photo search text: city followed by the current condition, trimmed.
    pub fn search_query(&self) -> String {
        let condition = self.condition.as_deref().unwrap_or_default();
        format!("{} {}", self.city, condition).trim().to_string()
    }
}

/// Forecast document exactly as the weather provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherResult(pub Value);

impl WeatherResult {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundResult {
    pub image_url: String,
}

impl BackgroundResult {
    pub fn fallback() -> Self {
        Self {
            image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}
