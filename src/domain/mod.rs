//! Domain Layer - Core screening logic
//!
//! Pure types and functions with no I/O. Time and the simulated safety/RSI
//! draws are passed in by the caller so every rule is deterministic under test.
//!
//! - `pair`: raw DEX pair record as returned by the market data feed
//! - `tier`: hot / watch / monitor classification
//! - `scam_score`: weighted safety checklist
//! - `trending`: keyword matching and the keyword collection
//! - `coin`: enrichment of a raw pair into a screened coin
//! - `exit_signals`: watchlist exit warnings
//! - `watchlist`: tracked coins with entry price and take-profit targets
//! - `format`: display helpers
//! - `filters`: listing filters and tier ordering
//! - `discovery`: dedupe and ranking of fetched pairs
//! - `settings`: persisted user preferences
//! - `security`: third-party audit summary
//! - `trading_links`: trading bot deep links

pub mod pair;
pub mod tier;
pub mod scam_score;
pub mod trending;
pub mod coin;
pub mod exit_signals;
pub mod watchlist;
pub mod format;
pub mod filters;
pub mod discovery;
pub mod settings;
pub mod security;
pub mod trading_links;

pub use pair::{Liquidity, PairInfo, PairRecord, TokenRef, TxnCount, Txns, Windowed, SOLANA_CHAIN_ID};
pub use tier::{classify_tier, Tier};
pub use scam_score::{generate_scam_score, ScamParameter, ScamScore, ScamStatus};
pub use trending::{
    feed_keywords, matches_trending_keywords, KeywordSet, KeywordSource, TrendMatch, TrendingKeyword,
};
pub use coin::{calculate_age_minutes, calculate_volume_change_24h, process_coin, EnrichedCoin, UNKNOWN_AGE_MINUTES};
pub use exit_signals::{generate_exit_signals, ExitSignal, ExitSignalType, Severity};
pub use watchlist::{TakeProfitLevel, Watchlist, WatchlistEntry, TARGET_MULTIPLES};
pub use filters::{apply_filters, sort_by_tier, AgeFilter, CoinFilters};
pub use settings::Settings;
pub use security::{risk_label, RiskLevel, SecurityReport};
pub use trading_links::{trading_links, TradingLink};
