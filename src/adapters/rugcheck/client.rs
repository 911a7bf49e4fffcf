//! RugCheck API Client
//!
//! Token audit summaries from `api.rugcheck.xyz/v1/tokens/{mint}/report/summary`.
//! Reports are cached per mint for five minutes to stay under the free tier limits.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::adapters::cache::TtlCache;
use crate::domain::security::SecurityReport;
use crate::ports::security_report::{SecurityReportError, SecurityReportPort};

pub const DEFAULT_BASE_URL: &str = "https://api.rugcheck.xyz/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Deserialize)]
struct ReportSummary {
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    risks: Option<Vec<RiskEntry>>,
    #[serde(default)]
    rugged: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RiskEntry {
    #[serde(default)]
    name: String,
}

/// Parse a report summary payload
pub fn parse_report_summary(body: &str) -> Result<SecurityReport, SecurityReportError> {
    let summary: ReportSummary =
        serde_json::from_str(body).map_err(|e| SecurityReportError::ParseError(e.to_string()))?;

    let score = summary
        .score
        .filter(|s| s.is_finite() && *s > 0.0)
        .map(|s| s.round() as u64)
        .unwrap_or(0);
    let names: Vec<String> = summary
        .risks
        .unwrap_or_default()
        .into_iter()
        .map(|r| r.name)
        .collect();

    Ok(SecurityReport::from_risks(
        score,
        &names,
        summary.rugged.unwrap_or(false),
    ))
}

#[derive(Debug, Clone)]
pub struct RugCheckClient {
    http_client: Client,
    base_url: String,
    cache: Arc<Mutex<TtlCache<SecurityReport>>>,
}

impl RugCheckClient {
    pub fn new() -> Result<Self, SecurityReportError> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TtlCache::<SecurityReport>::REPORT_TTL)
    }

    pub fn with_config(
        base_url: impl Into<String>,
        timeout_secs: u64,
        cache_ttl: Duration,
    ) -> Result<Self, SecurityReportError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SecurityReportError::RequestError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Arc::new(Mutex::new(TtlCache::new(cache_ttl))),
        })
    }

    pub fn report_url(&self, address: &str) -> String {
        format!("{}/tokens/{}/report/summary", self.base_url, address)
    }
}

#[async_trait]
impl SecurityReportPort for RugCheckClient {
    async fn report(&self, address: &str) -> Result<Option<SecurityReport>, SecurityReportError> {
        if let Some(cached) = self.cache.lock().await.get(address) {
            tracing::debug!(address, "RugCheck cache hit");
            return Ok(Some(cached));
        }

        let url = self.report_url(address);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SecurityReportError::RequestError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            tracing::debug!(address, "RugCheck has no report");
            return Ok(None);
        }
        if status.as_u16() == 429 {
            return Err(SecurityReportError::RateLimited(url));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SecurityReportError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SecurityReportError::RequestError(e.to_string()))?;
        let report = parse_report_summary(&body)?;

        tracing::info!(address, score = report.score, risk = %report.risk_level, "RugCheck report fetched");
        self.cache.lock().await.insert(address, report.clone());

        Ok(Some(report))
    }
}
