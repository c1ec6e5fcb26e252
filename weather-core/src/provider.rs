use crate::{
    Config, WeatherResult,
    provider::{pexels::PexelsProvider, weatherapi::WeatherApiProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod pexels;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    WeatherApi,
    Pexels,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::WeatherApi => "weatherapi",
            ProviderId::Pexels => "pexels",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::WeatherApi, ProviderId::Pexels]
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderId::WeatherApi => "WEATHER_API_KEY",
            ProviderId::Pexels => "PEXELS_API_KEY",
        }
    }

    pub fn base_url_var(&self) -> &'static str {
        match self {
            ProviderId::WeatherApi => "WEATHER_API_BASE_URL",
            ProviderId::Pexels => "PEXELS_BASE_URL",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderId::WeatherApi => weatherapi::DEFAULT_BASE_URL,
            ProviderId::Pexels => pexels::DEFAULT_BASE_URL,
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "weatherapi" => Ok(ProviderId::WeatherApi),
            "pexels" => Ok(ProviderId::Pexels),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: weatherapi, pexels."
            )),
        }
    }
}

/// Source of forecast documents.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Forecast for `city` covering `days` days, returned untouched.
    async fn forecast(&self, city: &str, days: u32) -> anyhow::Result<WeatherResult>;
}

/// Source of background photos.
#[async_trait]
pub trait PhotoProvider: Send + Sync + Debug {
    /// Landscape URL of the best match for `query`, or `None` when nothing matched.
    async fn search_landscape(&self, query: &str) -> anyhow::Result<Option<String>>;
}

fn api_key_for(id: ProviderId, config: &Config) -> anyhow::Result<String> {
    config.provider_api_key(id).map(str::to_owned).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for provider '{id}'.\n\
                 Hint: set {} or run `weather-server configure {id}`.",
            id.api_key_var()
        )
    })
}

/// Construct the forecast provider from config.
pub fn forecast_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let id = ProviderId::WeatherApi;
    let api_key = api_key_for(id, config)?;

    Ok(Box::new(WeatherApiProvider::with_base_url(api_key, config.provider_base_url(id))))
}

/// Construct the photo provider from config.
pub fn photo_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn PhotoProvider>> {
    let id = ProviderId::Pexels;
    let api_key = api_key_for(id, config)?;

    Ok(Box::new(PexelsProvider::with_base_url(api_key, config.provider_base_url(id))))
}

/// Shorten an upstream body for error messages without splitting a character.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
