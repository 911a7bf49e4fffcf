//! DexScreener API Client
//!
//! Pair search and token lookup against `api.dexscreener.com/latest/dex`.
//! Responses are filtered to Solana pairs and cached per request URL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::adapters::cache::TtlCache;
use crate::domain::pair::PairRecord;
use crate::ports::market_data::{MarketDataError, MarketDataPort};

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com/latest/dex";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// `/search` and `/tokens` share this envelope; `pairs` is null when nothing matched
#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<PairRecord>>,
}

/// Parse a DexScreener pairs payload, keeping only Solana pairs
pub fn parse_pairs_response(body: &str) -> Result<Vec<PairRecord>, MarketDataError> {
    let response: PairsResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::ParseError(e.to_string()))?;

    Ok(response
        .pairs
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.is_solana())
        .collect())
}

#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    http_client: Client,
    base_url: String,
    cache: Arc<Mutex<TtlCache<Vec<PairRecord>>>>,
}

impl DexScreenerClient {
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TtlCache::<Vec<PairRecord>>::SEARCH_TTL)
    }

    pub fn with_config(
        base_url: impl Into<String>,
        timeout_secs: u64,
        cache_ttl: Duration,
    ) -> Result<Self, MarketDataError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| MarketDataError::RequestError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Arc::new(Mutex::new(TtlCache::new(cache_ttl))),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, query: &str) -> Result<String, MarketDataError> {
        reqwest::Url::parse_with_params(&format!("{}/search", self.base_url), &[("q", query)])
            .map(String::from)
            .map_err(|e| MarketDataError::RequestError(e.to_string()))
    }

    pub fn tokens_url(&self, address: &str) -> String {
        format!("{}/tokens/{}", self.base_url, address)
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// GET with cache lookup by URL
    async fn fetch_pairs(&self, url: String) -> Result<Vec<PairRecord>, MarketDataError> {
        if let Some(cached) = self.cache.lock().await.get(&url) {
            tracing::debug!(url = %url, pairs = cached.len(), "DexScreener cache hit");
            return Ok(cached);
        }

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::RequestError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(MarketDataError::RateLimited(url));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::RequestError(e.to_string()))?;
        let pairs = parse_pairs_response(&body)?;

        tracing::debug!(url = %url, pairs = pairs.len(), "DexScreener fetched");
        self.cache.lock().await.insert(url, pairs.clone());

        Ok(pairs)
    }
}

#[async_trait]
impl MarketDataPort for DexScreenerClient {
    async fn search_pairs(&self, query: &str) -> Result<Vec<PairRecord>, MarketDataError> {
        self.fetch_pairs(self.search_url(query)?).await
    }

    async fn pairs_by_token(&self, address: &str) -> Result<Vec<PairRecord>, MarketDataError> {
        self.fetch_pairs(self.tokens_url(address)).await
    }
}
