//! Meme Screener - Solana Meme Coin Screener Library
//!
//! Discovers Solana pairs on DexScreener, classifies them into tiers, scores
//! them against a safety checklist and tracks a watchlist with exit signals.
//!
//! # Modules
//!
//! - `domain`: Core screening logic (tiers, scam score, trending match, exit signals, watchlist)
//! - `ports`: Trait abstractions (MarketDataPort, TrendingFeedPort, KeyValueStore, Notifier)
//! - `adapters`: External implementations (DexScreener, CoinGecko, storage, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: The screener service and its polling loop

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
