use reqwest::StatusCode;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{forecast_document, spawn_app};

#[tokio::test]
async fn repeated_city_uses_the_first_value() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_document("Paris", 1)))
        .expect(1)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather?city=Paris&city=London").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn weekly_ignores_repeated_days() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_document("Paris", 7)))
        .expect(1)
        .mount(&app.weather_api)
        .await;

    let response = app.get("/api/weather/week?city=Paris&days=1&days=2").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn repeated_forecast_condition_uses_the_first_value() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "London a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "photos": [{ "src": { "landscape": "https://images.pexels.com/london.jpeg" } }]
        })))
        .expect(1)
        .mount(&app.pexels)
        .await;

    let response = app.get("/api/background?city=London&Forecast=a&Forecast=b").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["image_url"], "https://images.pexels.com/london.jpeg");
}

#[tokio::test]
async fn repeated_keys_without_city_still_render_json_errors() {
    let app = spawn_app().await;

    let response = app.get("/api/weather?days=1&days=2").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Missing city parameter");
}
