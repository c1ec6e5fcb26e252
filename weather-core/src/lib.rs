//! Core library for the weather dashboard backend.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Clients for the forecast and photo-search upstreams
//! - The request proxy that validates queries and translates upstream failures
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod proxy;

pub use config::{Config, ProviderConfig};
pub use error::ProxyError;
pub use model::{BackgroundResult, FALLBACK_IMAGE_URL, LocationQuery, WeatherResult};
pub use provider::{ForecastProvider, PhotoProvider, ProviderId};
pub use proxy::RequestProxy;
