//! CoinGecko Trending Feed
//!
//! Turns `/search/trending` into screener keywords: every coin symbol, plus
//! names that are a single short word.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::trending::feed_keywords;
use crate::ports::trending_feed::{TrendingFeedError, TrendingFeedPort};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    #[serde(default)]
    coins: Vec<TrendingCoin>,
}

#[derive(Debug, Deserialize)]
struct TrendingCoin {
    item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    symbol: String,
}

/// Extract keywords from a `/search/trending` payload
pub fn parse_trending_response(body: &str) -> Result<Vec<String>, TrendingFeedError> {
    let response: TrendingResponse =
        serde_json::from_str(body).map_err(|e| TrendingFeedError::ParseError(e.to_string()))?;

    Ok(feed_keywords(
        response
            .coins
            .iter()
            .map(|c| (c.item.name.as_str(), c.item.symbol.as_str())),
    ))
}

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http_client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Result<Self, TrendingFeedError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, TrendingFeedError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TrendingFeedError::RequestError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn trending_url(&self) -> String {
        format!("{}/search/trending", self.base_url)
    }
}

#[async_trait]
impl TrendingFeedPort for CoinGeckoClient {
    async fn trending_keywords(&self) -> Result<Vec<String>, TrendingFeedError> {
        let response = self
            .http_client
            .get(self.trending_url())
            .send()
            .await
            .map_err(|e| TrendingFeedError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TrendingFeedError::ApiError(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TrendingFeedError::RequestError(e.to_string()))?;
        let keywords = parse_trending_response(&body)?;

        tracing::info!(count = keywords.len(), "Fetched trending keywords from CoinGecko");
        Ok(keywords)
    }
}
