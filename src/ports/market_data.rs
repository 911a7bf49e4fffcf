use async_trait::async_trait;
use thiserror::Error;

use crate::domain::pair::PairRecord;

/// Market data error type
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    RequestError(String),

    #[error("API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),
}

/// Source of DEX pair records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Free-text pair search. Only Solana pairs are returned.
    async fn search_pairs(&self, query: &str) -> Result<Vec<PairRecord>, MarketDataError>;

    /// All pairs for one token mint. Only Solana pairs are returned.
    async fn pairs_by_token(&self, address: &str) -> Result<Vec<PairRecord>, MarketDataError>;
}
