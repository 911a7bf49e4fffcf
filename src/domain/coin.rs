//! Coin Processor
//!
//! Turns a raw [`PairRecord`] into an [`EnrichedCoin`]: tier, scam score, age,
//! 24h volume-change estimate and trending match. Every call builds a new value;
//! derived fields are private so they cannot drift from the pair they came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pair::{PairRecord, Windowed};
use super::scam_score::{generate_scam_score, ScamScore};
use super::tier::{classify_tier, Tier};
use super::trending::matches_trending_keywords;
use crate::ports::signal_source::SimulatedSignalSource;

/// Age reported for pairs without a creation timestamp ("infinitely old")
pub const UNKNOWN_AGE_MINUTES: i64 = i64::MAX;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Whole minutes since pair creation.
///
/// Absent or zero timestamps yield [`UNKNOWN_AGE_MINUTES`]. Timestamps in the
/// future clamp to 0.
pub fn calculate_age_minutes(pair_created_at: Option<i64>, now: DateTime<Utc>) -> i64 {
    match pair_created_at {
        Some(created) if created != 0 => {
            let diff = now.timestamp_millis().saturating_sub(created);
            diff.div_euclid(MILLIS_PER_MINUTE).max(0)
        }
        _ => UNKNOWN_AGE_MINUTES,
    }
}

/// Percent difference between reported 24h volume and the 6h pace projected to 24h.
/// Returns 0 when there is no 6h volume to project from.
pub fn calculate_volume_change_24h(volume: &Windowed) -> f64 {
    let projected = volume.h6 * 4.0;
    if volume.h6 == 0.0 || !projected.is_finite() {
        return 0.0;
    }
    let change = ((volume.h24 - projected) / projected) * 100.0;
    if change.is_finite() {
        change
    } else {
        0.0
    }
}

/// A pair with all derived screening fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCoin {
    #[serde(flatten)]
    pair: PairRecord,
    tier: Tier,
    scam_score: ScamScore,
    age_minutes: i64,
    volume_change_24h: f64,
    matches_trending: bool,
    trending_keywords: Vec<String>,
}

impl EnrichedCoin {
    pub fn pair(&self) -> &PairRecord {
        &self.pair
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn scam_score(&self) -> &ScamScore {
        &self.scam_score
    }

    pub fn age_minutes(&self) -> i64 {
        self.age_minutes
    }

    pub fn has_known_age(&self) -> bool {
        self.age_minutes != UNKNOWN_AGE_MINUTES
    }

    pub fn volume_change_24h(&self) -> f64 {
        self.volume_change_24h
    }

    pub fn matches_trending(&self) -> bool {
        self.matches_trending
    }

    pub fn trending_keywords(&self) -> &[String] {
        &self.trending_keywords
    }

    /// Base token mint address, the watchlist key
    pub fn address(&self) -> &str {
        &self.pair.base_token.address
    }

    pub fn symbol(&self) -> &str {
        &self.pair.base_token.symbol
    }

    pub fn name(&self) -> &str {
        &self.pair.base_token.name
    }

    pub fn price_usd(&self) -> f64 {
        self.pair.price_usd_value()
    }

    /// Re-run the whole pipeline with a different keyword set, producing a new coin
    pub fn reprocess<S>(&self, keywords: &[String], now: DateTime<Utc>, signals: &mut S) -> EnrichedCoin
    where
        S: SimulatedSignalSource + ?Sized,
    {
        process_coin(self.pair.clone(), keywords, now, signals)
    }
}

/// Enrich a pair. The only way to build an [`EnrichedCoin`].
pub fn process_coin<S>(
    pair: PairRecord,
    keywords: &[String],
    now: DateTime<Utc>,
    signals: &mut S,
) -> EnrichedCoin
where
    S: SimulatedSignalSource + ?Sized,
{
    let tier = classify_tier(&pair, now);
    let scam_score = generate_scam_score(&pair, signals);
    let age_minutes = calculate_age_minutes(pair.pair_created_at, now);
    let volume_change_24h = calculate_volume_change_24h(&pair.volume);
    let trend = matches_trending_keywords(&pair, keywords);

    tracing::trace!(
        pair = %pair.pair_address,
        symbol = %pair.base_token.symbol,
        tier = %tier,
        score = scam_score.score,
        "Processed coin"
    );

    EnrichedCoin {
        pair,
        tier,
        scam_score,
        age_minutes,
        volume_change_24h,
        matches_trending: trend.matches,
        trending_keywords: trend.matched_keywords,
    }
}
