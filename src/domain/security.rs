//! Security Report
//!
//! Summary of a third-party token audit (RugCheck). The audit score grows with
//! risk, so a higher score is worse. This is unrelated to the heuristic
//! [`ScamScore`](super::scam_score::ScamScore), where higher is safer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audit score above which a token is `danger`
pub const DANGER_SCORE: u64 = 1000;
/// Audit score above which a token is `warning`
pub const WARNING_SCORE: u64 = 400;

pub const RISK_LIQUIDITY_UNLOCKED: &str = "Liquidity Unlocked";
pub const RISK_MINT_AUTHORITY: &str = "Mint Authority";
pub const RISK_FREEZE_AUTHORITY: &str = "Freeze Authority";

/// Shown when no report could be obtained. Never read as safe.
pub const UNKNOWN_RISK_LABEL: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Good,
    Warning,
    Danger,
}

impl RiskLevel {
    pub fn from_score(score: u64) -> Self {
        if score > DANGER_SCORE {
            RiskLevel::Danger
        } else if score > WARNING_SCORE {
            RiskLevel::Warning
        } else {
            RiskLevel::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Good => "good",
            RiskLevel::Warning => "warning",
            RiskLevel::Danger => "danger",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderShare {
    pub address: String,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub score: u64,
    pub risk_level: RiskLevel,
    pub is_liquidity_locked: bool,
    pub is_mintable: bool,
    pub is_freezable: bool,
    /// Empty from the summary endpoint; holder analysis needs the full report
    pub top_holders: Vec<HolderShare>,
    pub rugged: bool,
}

impl SecurityReport {
    /// Build a report from the audit score and the names of the reported risks.
    /// Risk names are matched by substring.
    pub fn from_risks<S: AsRef<str>>(score: u64, risk_names: &[S], rugged: bool) -> Self {
        let has_risk = |needle: &str| risk_names.iter().any(|name| name.as_ref().contains(needle));

        Self {
            score,
            risk_level: RiskLevel::from_score(score),
            is_liquidity_locked: !has_risk(RISK_LIQUIDITY_UNLOCKED),
            is_mintable: has_risk(RISK_MINT_AUTHORITY),
            is_freezable: has_risk(RISK_FREEZE_AUTHORITY),
            top_holders: Vec::new(),
            rugged,
        }
    }
}

/// Risk level label, `unknown` when there is no report
pub fn risk_label(report: Option<&SecurityReport>) -> &'static str {
    report.map(|r| r.risk_level.as_str()).unwrap_or(UNKNOWN_RISK_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Good);
        assert_eq!(RiskLevel::from_score(400), RiskLevel::Good);
        assert_eq!(RiskLevel::from_score(401), RiskLevel::Warning);
        assert_eq!(RiskLevel::from_score(1000), RiskLevel::Warning);
        assert_eq!(RiskLevel::from_score(1001), RiskLevel::Danger);
    }

    #[test]
    fn test_flags_from_risk_names() {
        let report = SecurityReport::from_risks(
            1500,
            &["Freeze Authority still enabled", "Liquidity Unlocked", "Low amount of LP Providers"],
            true,
        );

        assert_eq!(report.risk_level, RiskLevel::Danger);
        assert!(!report.is_liquidity_locked);
        assert!(!report.is_mintable);
        assert!(report.is_freezable);
        assert!(report.rugged);
        assert!(report.top_holders.is_empty());
    }

    #[test]
    fn test_no_risks_is_locked_and_immutable() {
        let report = SecurityReport::from_risks::<&str>(1, &[], false);
        assert_eq!(report.risk_level, RiskLevel::Good);
        assert!(report.is_liquidity_locked);
        assert!(!report.is_mintable);
        assert!(!report.is_freezable);
    }

    #[test]
    fn test_missing_report_is_unknown() {
        assert_eq!(risk_label(None), "unknown");

        let report = SecurityReport::from_risks(500, &["Mint Authority still enabled"], false);
        assert_eq!(risk_label(Some(&report)), "warning");
    }

    #[test]
    fn test_serialized_shape() {
        let report = SecurityReport::from_risks::<&str>(10, &[], false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["riskLevel"], "good");
        assert_eq!(json["isLiquidityLocked"], true);
    }
}
