//! Scam Score
//!
//! Heuristic 0-100 trust score built from a weighted seven-item checklist
//! plus a liquidity bonus/penalty.
//!
//! Only the liquidity lock check is derived from pair data. The remaining six
//! items come from a [`SimulatedSignalSource`] because the screener has no
//! on-chain security data; treat them as placeholders, not audit results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pair::PairRecord;
use super::tier::volume_change_proxy;
use crate::ports::signal_source::{CheckId, SimulatedSignalSource};

/// Liquidity (USD) above which the pool counts as locked and no penalty applies
pub const LOW_LIQUIDITY_USD: f64 = 10_000.0;
/// Liquidity (USD) above which the score gets a bonus
pub const DEEP_LIQUIDITY_USD: f64 = 100_000.0;
pub const DEEP_LIQUIDITY_BONUS: i32 = 5;
pub const LOW_LIQUIDITY_PENALTY: i32 = 10;

pub const SAFE_THRESHOLD: u8 = 80;
pub const WARNING_THRESHOLD: u8 = 50;

pub const FLAG_WASH_TRADING: &str = "Possible wash trading detected";
pub const FLAG_LOW_LIQUIDITY: &str = "Low liquidity (<$10k)";
pub const FLAG_HOLDER_CONCENTRATION: &str = "High holder concentration";

/// Static description of one checklist item
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub id: CheckId,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: u8,
}

/// Checklist in evaluation order. Weights sum to 100.
pub const CHECKLIST: [CheckSpec; 7] = [
    CheckSpec {
        id: CheckId::ContractVerified,
        name: "Contract Verified",
        description: "Contract source code is verified on explorer",
        weight: 15,
    },
    CheckSpec {
        id: CheckId::LiquidityLocked,
        name: "Liquidity Locked/Burned",
        description: "Liquidity is locked or burned",
        weight: 20,
    },
    CheckSpec {
        id: CheckId::Honeypot,
        name: "Honeypot Check",
        description: "Can sell tokens (not a honeypot)",
        weight: 25,
    },
    CheckSpec {
        id: CheckId::TaxLow,
        name: "Buy/Sell Tax <10%",
        description: "Trading taxes are below 10%",
        weight: 15,
    },
    CheckSpec {
        id: CheckId::OwnershipRenounced,
        name: "Ownership Renounced",
        description: "Contract ownership has been renounced",
        weight: 10,
    },
    CheckSpec {
        id: CheckId::TopHolders,
        name: "Top 10 Wallets <50%",
        description: "Top 10 wallets hold less than 50% of supply",
        weight: 10,
    },
    CheckSpec {
        id: CheckId::MintDisabled,
        name: "Mint Authority Disabled",
        description: "Cannot mint new tokens",
        weight: 5,
    },
];

/// Evaluated checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScamParameter {
    pub id: CheckId,
    pub name: String,
    pub description: String,
    pub passed: bool,
    pub weight: u8,
}

/// Categorical verdict derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScamStatus {
    Safe,
    Warning,
    Danger,
}

impl ScamStatus {
    pub fn from_score(score: u8) -> Self {
        if score >= SAFE_THRESHOLD {
            ScamStatus::Safe
        } else if score >= WARNING_THRESHOLD {
            ScamStatus::Warning
        } else {
            ScamStatus::Danger
        }
    }
}

impl fmt::Display for ScamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScamStatus::Safe => write!(f, "safe"),
            ScamStatus::Warning => write!(f, "warning"),
            ScamStatus::Danger => write!(f, "danger"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScamScore {
    /// 0-100
    pub score: u8,
    pub status: ScamStatus,
    pub parameters: Vec<ScamParameter>,
    pub flags: Vec<String>,
}

impl ScamScore {
    pub fn parameter(&self, id: CheckId) -> Option<&ScamParameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    pub fn passed_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.passed).count()
    }
}

/// Score a pair against the checklist
pub fn generate_scam_score<S>(pair: &PairRecord, signals: &mut S) -> ScamScore
where
    S: SimulatedSignalSource + ?Sized,
{
    let liquidity = pair.liquidity_usd();

    let parameters: Vec<ScamParameter> = CHECKLIST
        .iter()
        .map(|spec| {
            let passed = match spec.id {
                CheckId::LiquidityLocked => liquidity > LOW_LIQUIDITY_USD,
                other => signals.check_passes(other),
            };
            ScamParameter {
                id: spec.id,
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                passed,
                weight: spec.weight,
            }
        })
        .collect();

    let mut score: i32 = parameters
        .iter()
        .filter(|p| p.passed)
        .map(|p| p.weight as i32)
        .sum();

    if liquidity > DEEP_LIQUIDITY_USD {
        score = (score + DEEP_LIQUIDITY_BONUS).min(100);
    }
    if liquidity < LOW_LIQUIDITY_USD {
        score = (score - LOW_LIQUIDITY_PENALTY).max(0);
    }
    let score = score.clamp(0, 100) as u8;

    let mut flags = Vec::new();

    if volume_change_proxy(pair) > 500.0 && pair.price_change.h1.abs() < 5.0 {
        flags.push(FLAG_WASH_TRADING.to_string());
    }

    if liquidity < LOW_LIQUIDITY_USD {
        flags.push(FLAG_LOW_LIQUIDITY.to_string());
    }

    let top_holders_passed = parameters
        .iter()
        .find(|p| p.id == CheckId::TopHolders)
        .map(|p| p.passed)
        .unwrap_or(false);
    if !top_holders_passed {
        flags.push(FLAG_HOLDER_CONCENTRATION.to_string());
    }

    ScamScore {
        score,
        status: ScamStatus::from_score(score),
        parameters,
        flags,
    }
}
