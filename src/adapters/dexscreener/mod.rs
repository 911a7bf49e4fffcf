//! DexScreener Adapter
//!
//! `MarketDataPort` implementation over the public DexScreener REST API.

mod client;

pub use client::{parse_pairs_response, DexScreenerClient, DEFAULT_BASE_URL};
