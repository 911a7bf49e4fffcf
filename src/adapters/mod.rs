//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: pair search and token lookup
//! - CoinGecko: trending coins feed for keyword seeding
//! - RugCheck: token security report summaries
//! - Storage: JSON files on disk, or in-memory
//! - Notify: tracing output and a broadcast event bus
//! - CLI: Command-line interface handlers

pub mod cache;
pub mod cli;
pub mod coingecko;
pub mod dexscreener;
pub mod notify;
pub mod rugcheck;
pub mod storage;

pub use cache::TtlCache;
pub use cli::CliApp;
pub use coingecko::CoinGeckoClient;
pub use dexscreener::DexScreenerClient;
pub use notify::{EventBus, TracingNotifier};
pub use rugcheck::RugCheckClient;
pub use storage::{JsonFileStore, MemoryStore};
