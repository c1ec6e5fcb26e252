use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{WEATHER_KEY, forecast_document, spawn_app};

#[tokio::test]
async fn weather_returns_upstream_document_verbatim() {
    let app = spawn_app().await;
    let doc = forecast_document("Paris", 3);

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("key", WEATHER_KEY))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "3"))
        .and(query_param("alerts", "yes"))
        .and(query_param("aqi", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&doc))
        .expect(1)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather?city=Paris&days=3").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, doc);
}

#[tokio::test]
async fn weather_defaults_to_one_day() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_document("Oslo", 1)))
        .expect(1)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather?city=Oslo").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn weather_treats_malformed_days_as_one() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_document("Oslo", 1)))
        .expect(1)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather?city=Oslo&days=soon").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn weekly_always_requests_seven_days() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("q", "London"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_document("London", 7)))
        .expect(2)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather/week?city=London").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/api/weather/week?city=London&days=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["forecast"]["forecastday"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn missing_city_is_bad_request() {
    let app = spawn_app().await;

    for path in ["/api/weather", "/api/weather?days=3", "/api/weather/week", "/api/weather?city="] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "path: {path}");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "Missing city parameter");
    }

    let requests = app.weather_api.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn upstream_failure_is_internal_error_with_message() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&app.weather_api)
        .await;

    for path in ["/api/weather?city=Nowhere", "/api/weather/week?city=Nowhere"] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let message = body["error"].as_str().unwrap_or_default();
        assert!(message.contains("No matching location found."), "got: {message}");
    }
}

#[tokio::test]
async fn upstream_server_error_is_never_passed_through() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "partial": true })))
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather?city=Paris").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("partial").is_none());
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());
}
