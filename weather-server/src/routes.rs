use axum::Json;
use axum::extract::{Query, State};
use axum::http::Request;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};
use weather_core::model::DEFAULT_FORECAST_DAYS;
use weather_core::{BackgroundResult, WeatherResult};

use crate::error::ApiError;
use crate::state::AppState;

pub fn app_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/api/background", get(get_background))
        .route("/api/weather", get(get_forecast))
        .route("/api/weather/week", get(get_weekly_forecast))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(ProxyMakeSpan)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Clone)]
struct ProxyMakeSpan;

impl<B> MakeSpan<B> for ProxyMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// Raw query pairs. Repeated keys resolve to their first occurrence, so a
/// duplicated parameter never turns into a rejection.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn first(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    fn city(&self) -> &str {
        self.first("city").unwrap_or_default()
    }

    /// Current condition text as shown on the dashboard.
    fn condition(&self) -> Option<&str> {
        self.first("Forecast")
    }

    fn days(&self) -> u32 {
        parse_days(self.first("days"))
    }
}

/// Anything that is not a positive integer falls back to the default length.
fn parse_days(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|d| *d > 0)
        .unwrap_or(DEFAULT_FORECAST_DAYS)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[tracing::instrument(skip(state))]
async fn get_background(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<BackgroundResult>, ApiError> {
    let result = state
        .proxy
        .get_background(params.city(), params.condition())
        .await?;
    Ok(Json(result))
}

#[tracing::instrument(skip(state))]
async fn get_forecast(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<WeatherResult>, ApiError> {
    let result = state.proxy.get_forecast(params.city(), params.days()).await?;
    Ok(Json(result))
}

#[tracing::instrument(skip(state))]
async fn get_weekly_forecast(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<WeatherResult>, ApiError> {
    let result = state.proxy.get_weekly_forecast(params.city()).await?;
    Ok(Json(result))
}
