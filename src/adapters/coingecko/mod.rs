//! CoinGecko Adapter
//!
//! `TrendingFeedPort` implementation over the public CoinGecko trending search.

mod client;

pub use client::{parse_trending_response, CoinGeckoClient, DEFAULT_BASE_URL};
