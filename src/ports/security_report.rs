use async_trait::async_trait;
use thiserror::Error;

use crate::domain::security::SecurityReport;

#[derive(Error, Debug)]
pub enum SecurityReportError {
    #[error("HTTP request failed: {0}")]
    RequestError(String),

    #[error("API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),
}

/// Third-party token audit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecurityReportPort: Send + Sync {
    /// Audit summary for a token mint. `Ok(None)` when the auditor has no report.
    async fn report(&self, address: &str) -> Result<Option<SecurityReport>, SecurityReportError>;
}
