use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendingFeedError {
    #[error("HTTP request failed: {0}")]
    RequestError(String),

    #[error("API returned status {0}")]
    ApiError(u16),

    #[error("Data parsing error: {0}")]
    ParseError(String),
}

/// External source of trending search words
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendingFeedPort: Send + Sync {
    /// Lowercased, deduplicated keywords
    async fn trending_keywords(&self) -> Result<Vec<String>, TrendingFeedError>;
}
