pub mod screener;

pub use screener::{Screener, ScreenerDeps, ScreenerError, ScreenerOptions, WatchlistRefresh};
