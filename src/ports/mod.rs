//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - DEX pair search (market data)
//! - Trending keyword feed
//! - Token security reports
//! - Key-value persistence
//! - Notifications
//! - Wall clock and the simulated signal draws

pub mod market_data;
pub mod trending_feed;
pub mod security_report;
pub mod storage;
pub mod notifier;
pub mod clock;
pub mod signal_source;

// Re-export main traits and types
pub use market_data::{MarketDataError, MarketDataPort};
pub use trending_feed::{TrendingFeedError, TrendingFeedPort};
pub use security_report::{SecurityReportError, SecurityReportPort};
pub use storage::{load_json, save_json, KeyValueStore, StorageError};
pub use notifier::{Notification, Notifier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use signal_source::{CheckId, RandomSignalSource, ScriptedSignalSource, SimulatedSignalSource};
