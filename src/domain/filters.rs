//! Coin filters and tier ordering for screener listings.

use serde::{Deserialize, Serialize};

use super::coin::EnrichedCoin;
use super::tier::Tier;

/// Maximum pair age accepted by a listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgeFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
}

impl AgeFilter {
    /// Maximum age in minutes, `None` for no limit
    pub fn max_minutes(&self) -> Option<i64> {
        match self {
            AgeFilter::All => None,
            AgeFilter::OneMinute => Some(1),
            AgeFilter::FiveMinutes => Some(5),
            AgeFilter::ThirtyMinutes => Some(30),
            AgeFilter::OneHour => Some(60),
            AgeFilter::TwoHours => Some(120),
            AgeFilter::SixHours => Some(360),
            AgeFilter::OneDay => Some(1440),
        }
    }
}

impl std::str::FromStr for AgeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(AgeFilter::All),
            "1m" => Ok(AgeFilter::OneMinute),
            "5m" => Ok(AgeFilter::FiveMinutes),
            "30m" => Ok(AgeFilter::ThirtyMinutes),
            "1h" => Ok(AgeFilter::OneHour),
            "2h" => Ok(AgeFilter::TwoHours),
            "6h" => Ok(AgeFilter::SixHours),
            "24h" => Ok(AgeFilter::OneDay),
            other => Err(format!("unknown age filter '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinFilters {
    /// Substring of name, symbol or mint address (case-insensitive)
    pub search: String,
    /// `None` = all tiers
    pub tier: Option<Tier>,
    /// Inclusive scam score range
    pub score_range: (u8, u8),
    pub volume_min: f64,
    pub age: AgeFilter,
    /// Drop coins in tier `none`
    pub only_tiered: bool,
}

impl Default for CoinFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            tier: None,
            score_range: (0, 100),
            volume_min: 0.0,
            age: AgeFilter::All,
            only_tiered: false,
        }
    }
}

impl CoinFilters {
    pub fn matches(&self, coin: &EnrichedCoin) -> bool {
        if !self.search.is_empty() {
            let search = self.search.to_lowercase();
            let token = &coin.pair().base_token;
            let hit = token.name.to_lowercase().contains(&search)
                || token.symbol.to_lowercase().contains(&search)
                || token.address.to_lowercase().contains(&search);
            if !hit {
                return false;
            }
        }

        if let Some(tier) = self.tier {
            if coin.tier() != tier {
                return false;
            }
        }

        if self.only_tiered && coin.tier() == Tier::None {
            return false;
        }

        let score = coin.scam_score().score;
        if score < self.score_range.0 || score > self.score_range.1 {
            return false;
        }

        if coin.pair().volume.h24 < self.volume_min {
            return false;
        }

        if let Some(max_minutes) = self.age.max_minutes() {
            if !coin.has_known_age() || coin.age_minutes() > max_minutes {
                return false;
            }
        }

        true
    }
}

pub fn apply_filters(coins: &[EnrichedCoin], filters: &CoinFilters) -> Vec<EnrichedCoin> {
    coins.iter().filter(|c| filters.matches(c)).cloned().collect()
}

/// Stable sort, most urgent tier first
pub fn sort_by_tier(coins: &mut [EnrichedCoin]) {
    coins.sort_by_key(|c| c.tier().priority());
}
