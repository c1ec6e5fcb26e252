//! The request proxy: validates dashboard queries, calls exactly one upstream
//! and translates the outcome into a result or a [`ProxyError`].

use tracing::{instrument, warn};

use crate::{
    Config,
    error::ProxyError,
    model::{BackgroundResult, LocationQuery, WEEK_FORECAST_DAYS, WeatherResult},
    provider::{
        ForecastProvider, PhotoProvider, forecast_provider_from_config, photo_provider_from_config,
    },
};

/// Message returned to clients whenever the photo search fails.
const IMAGE_FETCH_FAILED: &str = "Failed to fetch image";

#[derive(Debug)]
pub struct RequestProxy {
    forecast: Box<dyn ForecastProvider>,
    photos: Box<dyn PhotoProvider>,
}

impl RequestProxy {
    pub fn new(forecast: Box<dyn ForecastProvider>, photos: Box<dyn PhotoProvider>) -> Self {
        Self { forecast, photos }
    }

    /// Build both upstream clients from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(forecast_provider_from_config(config)?, photo_provider_from_config(config)?))
    }

    /// Background image for a city, optionally narrowed by the current condition.
    #[instrument(skip(self))]
    pub async fn get_background(
        &self,
        city: &str,
        condition: Option<&str>,
    ) -> Result<BackgroundResult, ProxyError> {
        let mut query = LocationQuery::new(city)?;
        if let Some(condition) = condition {
            query = query.with_condition(condition);
        }

        match self.photos.search_landscape(&query.search_query()).await {
            Ok(Some(image_url)) => Ok(BackgroundResult { image_url }),
            Ok(None) => Ok(BackgroundResult::fallback()),
            Err(err) => {
                warn!(error = %err, "photo search failed");
                Err(ProxyError::upstream(IMAGE_FETCH_FAILED))
            }
        }
    }

    /// Forecast for `days` days, passed through untouched.
    #[instrument(skip(self))]
    pub async fn get_forecast(&self, city: &str, days: u32) -> Result<WeatherResult, ProxyError> {
        let query = LocationQuery::new(city)?.with_days(days);
        self.fetch(&query).await
    }

    /// Seven-day forecast.
    #[instrument(skip(self))]
    pub async fn get_weekly_forecast(&self, city: &str) -> Result<WeatherResult, ProxyError> {
        let query = LocationQuery::new(city)?.with_days(WEEK_FORECAST_DAYS);
        self.fetch(&query).await
    }

    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherResult, ProxyError> {
        self.forecast.forecast(&query.city, query.days).await.map_err(|err| {
            warn!(error = %err, city = %query.city, "forecast request failed");
            ProxyError::from(err)
        })
    }
}
