use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::debug;

use crate::provider::truncate_body;

use super::PhotoProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com";

#[derive(Debug, Clone)]
pub struct PexelsProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl PexelsProvider {
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

    async fn search(&self, query: &str) -> Result<PxSearchResponse> {
        let url = format!("{}/v1/search", self.base_url);

        debug!(query, "searching Pexels");

        let res = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .await
            .context("Failed to send request to Pexels (search)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read Pexels search response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Pexels search request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse Pexels search JSON")
    }
}

#[derive(Debug, Deserialize)]
struct PxSrc {
    landscape: String,
}

#[derive(Debug, Deserialize)]
struct PxPhoto {
    src: PxSrc,
}

#[derive(Debug, Deserialize)]
struct PxSearchResponse {
    #[serde(default)]
    photos: Vec<PxPhoto>,
}

#[async_trait]
impl PhotoProvider for PexelsProvider {
    async fn search_landscape(&self, query: &str) -> Result<Option<String>> {
        let parsed = self.search(query).await?;
        Ok(parsed.photos.into_iter().next().map(|p| p.src.landscape))
    }
}
