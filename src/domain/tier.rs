//! Tier Classifier
//!
//! Buckets a pair into an urgency tier from volume and price-change heuristics.
//!
//! The "volume change" used here is `|priceChange.h24| * 10`, a price-derived
//! proxy rather than a measured volume change. Thresholds were tuned against
//! this exact proxy, so it is kept as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::coin::calculate_age_minutes;
use super::pair::PairRecord;

/// Hot tier: proxy volume change above this with a strong 1h move
pub const HOT_VOLUME_CHANGE: f64 = 500.0;
/// Hot tier: minimum 1h price change (%)
pub const HOT_PRICE_CHANGE_1H: f64 = 30.0;
/// Hot tier (new launch path): pair younger than this many minutes
pub const HOT_MAX_AGE_MINUTES: i64 = 45;
/// Hot tier (new launch path) and monitor tier proxy volume change
pub const NEW_LAUNCH_VOLUME_CHANGE: f64 = 200.0;
/// Watch tier: proxy volume change
pub const WATCH_VOLUME_CHANGE: f64 = 300.0;
/// Watch tier: minimum 1h price change (%)
pub const WATCH_PRICE_CHANGE_1H: f64 = 15.0;
/// Monitor tier: absolute 24h volume in USD
pub const MONITOR_VOLUME_24H_USD: f64 = 100_000.0;

/// Urgency tier, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hot,
    Watch,
    Monitor,
    None,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Hot, Tier::Watch, Tier::Monitor, Tier::None];

    /// Sort rank, 0 = most urgent
    pub fn priority(&self) -> u8 {
        match self {
            Tier::Hot => 0,
            Tier::Watch => 1,
            Tier::Monitor => 2,
            Tier::None => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Hot => "hot",
            Tier::Watch => "watch",
            Tier::Monitor => "monitor",
            Tier::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Hot => "HOT",
            Tier::Watch => "WATCH",
            Tier::Monitor => "MONITOR",
            Tier::None => "-",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Hot => "Volume >500% with >30% 1h move, or new launch (<45m) with >200% volume",
            Tier::Watch => "Volume >300% with >15% 1h move",
            Tier::Monitor => "Volume >200% or 24h volume above $100k",
            Tier::None => "No notable activity",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Tier::Hot),
            "watch" => Ok(Tier::Watch),
            "monitor" => Ok(Tier::Monitor),
            "none" => Ok(Tier::None),
            other => Err(format!("unknown tier '{}'", other)),
        }
    }
}

/// Price-derived volume change proxy used by the classifier and wash-trading flag
pub fn volume_change_proxy(pair: &PairRecord) -> f64 {
    (pair.price_change.h24 * 10.0).abs()
}

/// Classify a pair, first matching rule wins
pub fn classify_tier(pair: &PairRecord, now: DateTime<Utc>) -> Tier {
    let volume_24h = pair.volume.h24;
    let price_change_1h = pair.price_change.h1;
    let age_minutes = calculate_age_minutes(pair.pair_created_at, now);
    let volume_change = volume_change_proxy(pair);

    if (volume_change > HOT_VOLUME_CHANGE && price_change_1h > HOT_PRICE_CHANGE_1H)
        || (age_minutes < HOT_MAX_AGE_MINUTES && volume_change > NEW_LAUNCH_VOLUME_CHANGE)
    {
        return Tier::Hot;
    }

    if volume_change > WATCH_VOLUME_CHANGE && price_change_1h > WATCH_PRICE_CHANGE_1H {
        return Tier::Watch;
    }

    if volume_change > NEW_LAUNCH_VOLUME_CHANGE || volume_24h > MONITOR_VOLUME_24H_USD {
        return Tier::Monitor;
    }

    Tier::None
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(NOW_MS).unwrap()
    }

    fn pair(h1: f64, h24: f64, volume_24h: f64, created_at: Option<i64>) -> PairRecord {
        let mut p = PairRecord::default();
        p.price_change.h1 = h1;
        p.price_change.h24 = h24;
        p.volume.h24 = volume_24h;
        p.pair_created_at = created_at;
        p
    }

    #[test]
    fn test_hot_by_volume_and_momentum() {
        // proxy = 600 > 500, h1 = 35 > 30
        let p = pair(35.0, 60.0, 50_000.0, Some(NOW_MS));
        assert_eq!(classify_tier(&p, now()), Tier::Hot);
    }

    #[test]
    fn test_hot_by_new_launch() {
        // 10 minutes old, proxy = 250 > 200
        let p = pair(0.0, 25.0, 0.0, Some(NOW_MS - 10 * 60_000));
        assert_eq!(classify_tier(&p, now()), Tier::Hot);
    }

    #[test]
    fn test_old_pair_not_hot_by_launch_rule() {
        let p = pair(0.0, 25.0, 0.0, Some(NOW_MS - 45 * 60_000));
        assert_eq!(classify_tier(&p, now()), Tier::Monitor);
    }

    #[test]
    fn test_unknown_age_excludes_launch_rule() {
        let p = pair(0.0, 25.0, 0.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Monitor);
    }

    #[test]
    fn test_negative_price_change_uses_absolute_value() {
        // proxy = 600, but h1 must be positive for the momentum rule
        let p = pair(-35.0, -60.0, 0.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Monitor);

        let p = pair(20.0, -40.0, 0.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Watch);
    }

    #[test]
    fn test_watch() {
        let p = pair(20.0, 35.0, 0.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Watch);
    }

    #[test]
    fn test_monitor_by_volume() {
        let p = pair(0.0, 0.0, 150_000.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Monitor);
    }

    #[test]
    fn test_none() {
        let p = pair(5.0, 10.0, 5_000.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::None);

        assert_eq!(classify_tier(&PairRecord::default(), now()), Tier::None);
    }

    #[test]
    fn test_boundaries_are_strict() {
        // proxy exactly 500, h1 exactly 30 -> not hot; 500 > 300 but h1 30 > 15 -> watch
        let p = pair(30.0, 50.0, 0.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::Watch);

        // proxy exactly 200 and volume exactly 100k -> none
        let p = pair(0.0, 20.0, 100_000.0, None);
        assert_eq!(classify_tier(&p, now()), Tier::None);
    }

    #[test]
    fn test_hot_implies_hot_predicate() {
        let grid = [-80.0, -40.0, -10.0, 0.0, 10.0, 16.0, 31.0, 60.0];
        for &h1 in &grid {
            for &h24 in &grid {
                for created in [None, Some(NOW_MS), Some(NOW_MS - 30 * 60_000), Some(NOW_MS - 90 * 60_000)] {
                    let p = pair(h1, h24, 0.0, created);
                    if classify_tier(&p, now()) == Tier::Hot {
                        let vc = volume_change_proxy(&p);
                        let age = calculate_age_minutes(p.pair_created_at, now());
                        assert!((vc > 500.0 && h1 > 30.0) || (age < 45 && vc > 200.0));
                    }
                }
            }
        }
    }

    #[test]
    fn test_tier_ordering_and_parse() {
        assert!(Tier::Hot < Tier::Watch);
        assert!(Tier::Watch < Tier::Monitor);
        assert!(Tier::Monitor < Tier::None);
        assert_eq!("HOT".parse::<Tier>(), Ok(Tier::Hot));
        assert!("lukewarm".parse::<Tier>().is_err());
        assert_eq!(serde_json::to_string(&Tier::Monitor).unwrap(), "\"monitor\"");
    }
}
