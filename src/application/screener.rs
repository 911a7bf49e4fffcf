//! Screener
//!
//! Application shell around the screening core. Owns the persisted state
//! (settings, keywords, watchlist), drives fetches through the market data
//! port, and runs the polling loop.
//!
//! Startup order is fixed: `bootstrap` hydrates settings, then keywords
//! (seeding from the trending feed when empty), then the watchlist.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;

use crate::adapters::cache::TtlCache;
use crate::domain::coin::{process_coin, EnrichedCoin};
use crate::domain::discovery::{
    dedupe_by_pair_address, rank_pump_candidates, search_terms, top_by_volume, PUMP_LIMIT,
    PUMP_SEARCH_TERMS, TRENDING_LIMIT,
};
use crate::domain::exit_signals::{ExitSignal, Severity};
use crate::domain::filters::{apply_filters, sort_by_tier, CoinFilters};
use crate::domain::pair::PairRecord;
use crate::domain::security::SecurityReport;
use crate::domain::settings::Settings;
use crate::domain::tier::Tier;
use crate::domain::trending::{KeywordSet, KeywordSource};
use crate::domain::watchlist::Watchlist;
use crate::ports::clock::Clock;
use crate::ports::market_data::{MarketDataError, MarketDataPort};
use crate::ports::notifier::{Notification, Notifier};
use crate::ports::signal_source::SimulatedSignalSource;
use crate::ports::storage::{
    load_json, save_json, KeyValueStore, StorageError, SETTINGS_KEY, TRENDING_KEY, WATCHLIST_KEY,
};
use crate::ports::security_report::SecurityReportPort;
use crate::ports::trending_feed::{TrendingFeedError, TrendingFeedPort};

const PUMP_CACHE_KEY: &str = "pump-feed";

#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),
    #[error("Trending feed error: {0}")]
    TrendingFeed(#[from] TrendingFeedError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("No Solana pair found for {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// External collaborators
pub struct ScreenerDeps {
    pub market_data: Arc<dyn MarketDataPort>,
    pub trending_feed: Arc<dyn TrendingFeedPort>,
    pub security: Arc<dyn SecurityReportPort>,
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
    pub signals: Box<dyn SimulatedSignalSource + Send>,
}

#[derive(Debug, Clone)]
pub struct ScreenerOptions {
    /// Scan the pump feed instead of keyword searches
    pub pump_mode: bool,
    /// Notify when a coin newly enters the hot tier
    pub notify_hot: bool,
    pub pump_cache_ttl: Duration,
    /// Used when no settings are persisted yet
    pub initial_settings: Settings,
}

impl Default for ScreenerOptions {
    fn default() -> Self {
        Self {
            pump_mode: false,
            notify_hot: true,
            pump_cache_ttl: TtlCache::<Vec<PairRecord>>::PUMP_TTL,
            initial_settings: Settings::default(),
        }
    }
}

/// Outcome of one watchlist refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchlistRefresh {
    pub updated: usize,
    /// Addresses with no fresh pair this cycle; their entries are unchanged
    pub missing: Vec<String>,
    /// Addresses that raised a danger signal
    pub danger: Vec<String>,
}

pub struct Screener {
    market_data: Arc<dyn MarketDataPort>,
    trending_feed: Arc<dyn TrendingFeedPort>,
    security: Arc<dyn SecurityReportPort>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    signals: Box<dyn SimulatedSignalSource + Send>,
    options: ScreenerOptions,
    settings: Settings,
    keywords: KeywordSet,
    watchlist: Watchlist,
    coins: Vec<EnrichedCoin>,
    pump_cache: TtlCache<Vec<PairRecord>>,
    bootstrapped: bool,
}

impl Screener {
    pub fn new(deps: ScreenerDeps, options: ScreenerOptions) -> Self {
        let pump_cache = TtlCache::new(options.pump_cache_ttl);
        let settings = options.initial_settings.clone();
        Self {
            market_data: deps.market_data,
            trending_feed: deps.trending_feed,
            security: deps.security,
            store: deps.store,
            notifier: deps.notifier,
            clock: deps.clock,
            signals: deps.signals,
            options,
            settings,
            keywords: KeywordSet::new(),
            watchlist: Watchlist::new(),
            coins: Vec::new(),
            pump_cache,
            bootstrapped: false,
        }
    }

    /// Hydrate persisted state: settings, then keywords, then watchlist
    pub async fn bootstrap(&mut self) -> Result<(), ScreenerError> {
        if let Some(settings) = self.load_or_reset::<Settings>(SETTINGS_KEY)? {
            self.settings = settings;
        }

        if let Some(keywords) = self.load_or_reset::<KeywordSet>(TRENDING_KEY)? {
            self.keywords = keywords;
        }
        if self.keywords.needs_seed() {
            match self.seed_keywords().await {
                Ok(added) => tracing::info!(added, "Seeded trending keywords"),
                Err(e) => tracing::warn!("Trending feed unavailable, starting without seed: {}", e),
            }
        }

        if let Some(watchlist) = self.load_or_reset::<Watchlist>(WATCHLIST_KEY)? {
            self.watchlist = watchlist;
        }

        self.bootstrapped = true;
        tracing::info!(
            keywords = self.keywords.len(),
            watchlist = self.watchlist.len(),
            interval_secs = self.settings.auto_refresh_interval(),
            "Screener bootstrapped"
        );
        Ok(())
    }

    /// Corrupted state is logged and replaced by defaults
    fn load_or_reset<T>(&self, key: &str) -> Result<Option<T>, ScreenerError>
    where
        T: serde::de::DeserializeOwned,
    {
        match load_json::<T, _>(self.store.as_ref(), key) {
            Ok(value) => Ok(value),
            Err(StorageError::Corrupted { key, reason }) => {
                tracing::warn!(key = %key, "Discarding corrupted state: {}", reason);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Coins from the most recent scan, tier-sorted
    pub fn coins(&self) -> &[EnrichedCoin] {
        &self.coins
    }

    pub fn pump_mode(&self) -> bool {
        self.options.pump_mode
    }

    pub fn set_pump_mode(&mut self, enabled: bool) {
        self.options.pump_mode = enabled;
    }

    /// Last scan filtered, honouring the `show_only_tiered` setting
    pub fn filtered_coins(&self, filters: &CoinFilters) -> Vec<EnrichedCoin> {
        let mut filters = filters.clone();
        filters.only_tiered |= self.settings.show_only_tiered;
        apply_filters(&self.coins, &filters)
    }

    // ---- scanning ----

    /// Fetch, enrich and tier-sort the current feed
    pub async fn scan(&mut self) -> Result<&[EnrichedCoin], ScreenerError> {
        let pairs = if self.options.pump_mode {
            self.fetch_pump_pairs().await
        } else {
            self.fetch_trending_pairs().await
        };

        let previous_hot: HashSet<String> = self
            .coins
            .iter()
            .filter(|c| c.tier() == Tier::Hot)
            .map(|c| c.address().to_string())
            .collect();

        let mut coins = self.process_pairs(pairs);
        sort_by_tier(&mut coins);

        if self.options.notify_hot {
            for coin in coins.iter().filter(|c| c.tier() == Tier::Hot) {
                if !previous_hot.contains(coin.address()) {
                    self.notifier.notify(&Notification::HotCoin {
                        address: coin.address().to_string(),
                        symbol: coin.symbol().to_string(),
                        tier: coin.tier(),
                        scam_score: coin.scam_score().score,
                    });
                }
            }
        }

        tracing::info!(
            coins = coins.len(),
            hot = coins.iter().filter(|c| c.tier() == Tier::Hot).count(),
            pump_mode = self.options.pump_mode,
            "Scan complete"
        );
        self.coins = coins;
        Ok(&self.coins)
    }

    /// Free-text search, tier-sorted. Blank queries return nothing.
    pub async fn search(&mut self, query: &str) -> Result<Vec<EnrichedCoin>, ScreenerError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let pairs = self.market_data.search_pairs(query).await?;
        let mut coins = self.process_pairs(pairs);
        sort_by_tier(&mut coins);
        Ok(coins)
    }

    fn process_pairs(&mut self, pairs: Vec<PairRecord>) -> Vec<EnrichedCoin> {
        let keywords = self.keywords.active_keywords();
        let now = self.clock.now();
        pairs
            .into_iter()
            .map(|pair| process_coin(pair, &keywords, now, &mut *self.signals))
            .collect()
    }

    /// Run `terms` as searches; a failed query contributes no pairs
    async fn search_all<S: AsRef<str>>(&self, terms: &[S]) -> Vec<PairRecord> {
        let mut pairs = Vec::new();
        let mut failures = 0usize;

        for term in terms {
            match self.market_data.search_pairs(term.as_ref()).await {
                Ok(mut found) => pairs.append(&mut found),
                Err(e) => {
                    failures += 1;
                    tracing::warn!(query = term.as_ref(), "Search failed: {}", e);
                }
            }
        }

        if !terms.is_empty() && failures == terms.len() {
            self.notifier.notify(&Notification::RefreshFailed {
                reason: format!("all {} searches failed", failures),
            });
        }
        pairs
    }

    /// Active keywords (or the fallback terms), top 100 by 24h volume
    pub async fn fetch_trending_pairs(&self) -> Vec<PairRecord> {
        let terms = search_terms(&self.keywords.active_keywords());
        let pairs = self.search_all(terms.as_slice()).await;
        top_by_volume(dedupe_by_pair_address(pairs), TRENDING_LIMIT)
    }

    /// Broad searches ranked by 1h turnover, top 50. Cached separately from searches.
    pub async fn fetch_pump_pairs(&mut self) -> Vec<PairRecord> {
        if let Some(cached) = self.pump_cache.get(PUMP_CACHE_KEY) {
            return cached;
        }

        let pairs = self.search_all(&PUMP_SEARCH_TERMS).await;
        let ranked = rank_pump_candidates(dedupe_by_pair_address(pairs), PUMP_LIMIT);
        if !ranked.is_empty() {
            self.pump_cache.insert(PUMP_CACHE_KEY, ranked.clone());
        }
        ranked
    }

    /// First Solana pair for a token mint
    async fn fetch_token_pair(&self, address: &str) -> Result<Option<PairRecord>, ScreenerError> {
        let pairs = self.market_data.pairs_by_token(address).await?;
        Ok(pairs.into_iter().find(|p| p.is_solana()))
    }

    // ---- watchlist ----

    /// Track a coin by base token address. Uses the last scan when it has the coin,
    /// otherwise looks the token up. Returns false if it was already tracked.
    pub async fn watch(&mut self, address: &str, entry_price: Option<f64>) -> Result<bool, ScreenerError> {
        if let Some(price) = entry_price {
            validate_price(price)?;
        }
        if self.watchlist.contains(address) {
            return Ok(false);
        }

        let coin = match self.coins.iter().find(|c| c.address() == address) {
            Some(coin) => coin.clone(),
            None => {
                let pair = self
                    .fetch_token_pair(address)
                    .await?
                    .ok_or_else(|| ScreenerError::NotFound(address.to_string()))?;
                let mut processed = self.process_pairs(vec![pair]);
                processed.pop().ok_or_else(|| ScreenerError::NotFound(address.to_string()))?
            }
        };

        let symbol = coin.symbol().to_string();
        let added = self.watchlist.add(coin, entry_price, self.clock.now());
        if added {
            self.save_watchlist()?;
            tracing::info!(symbol = %symbol, address, "Added to watchlist");
        }
        Ok(added)
    }

    pub fn unwatch(&mut self, address: &str) -> Result<bool, ScreenerError> {
        let removed = self.watchlist.remove(address).is_some();
        if removed {
            self.save_watchlist()?;
            tracing::info!(address, "Removed from watchlist");
        }
        Ok(removed)
    }

    pub fn set_entry_price(&mut self, address: &str, price: f64) -> Result<bool, ScreenerError> {
        validate_price(price)?;
        let updated = self.watchlist.update_entry_price(address, price);
        if updated {
            self.save_watchlist()?;
        }
        Ok(updated)
    }

    /// Re-fetch every tracked coin and evaluate exit signals against the stored snapshot
    pub async fn refresh_watchlist(&mut self) -> Result<WatchlistRefresh, ScreenerError> {
        let mut report = WatchlistRefresh::default();
        if self.watchlist.is_empty() {
            return Ok(report);
        }

        for address in self.watchlist.addresses() {
            let pair = match self.fetch_token_pair(&address).await {
                Ok(Some(pair)) => pair,
                Ok(None) => {
                    report.missing.push(address);
                    continue;
                }
                Err(e) => {
                    tracing::warn!(address = %address, "Watchlist refresh failed: {}", e);
                    report.missing.push(address);
                    continue;
                }
            };

            let coin = match self.process_pairs(vec![pair]).pop() {
                Some(coin) => coin,
                None => continue,
            };
            let symbol = coin.symbol().to_string();
            let now = self.clock.now();

            let danger: Vec<ExitSignal> = match self.watchlist.update_coin(coin, &mut *self.signals, now) {
                Some(signals) => signals
                    .iter()
                    .filter(|s| s.severity == Severity::Danger)
                    .cloned()
                    .collect(),
                None => continue,
            };
            report.updated += 1;

            if !danger.is_empty() {
                self.notifier.notify(&Notification::ExitDanger {
                    address: address.clone(),
                    symbol,
                    signals: danger,
                });
                report.danger.push(address);
            }
        }

        self.save_watchlist()?;
        tracing::info!(
            updated = report.updated,
            missing = report.missing.len(),
            danger = report.danger.len(),
            "Watchlist refreshed"
        );
        Ok(report)
    }

    /// Recompute every entry's signals without a previous snapshot
    pub fn reevaluate_exit_signals(&mut self) -> Result<(), ScreenerError> {
        let now = self.clock.now();
        self.watchlist.refresh_exit_signals(&mut *self.signals, now);
        self.save_watchlist()
    }

    fn save_watchlist(&self) -> Result<(), ScreenerError> {
        save_json(self.store.as_ref(), WATCHLIST_KEY, &self.watchlist)?;
        Ok(())
    }

    /// Audit summary for a token. `None` means unknown: no report exists or the
    /// lookup failed. Callers must not treat it as safe.
    pub async fn security_report(&self, address: &str) -> Option<SecurityReport> {
        match self.security.report(address).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(address, "Security check failed: {}", e);
                None
            }
        }
    }

    // ---- keywords ----

    /// Merge the trending feed into the keyword set
    pub async fn seed_keywords(&mut self) -> Result<usize, ScreenerError> {
        let words = self.trending_feed.trending_keywords().await?;
        let added = self
            .keywords
            .merge_feed(&words, self.clock.now().timestamp_millis());
        self.save_keywords()?;
        Ok(added)
    }

    pub fn add_keyword(&mut self, keyword: &str, source: KeywordSource) -> Result<Option<String>, ScreenerError> {
        let id = self
            .keywords
            .add(keyword, source, self.clock.now().timestamp_millis());
        if id.is_some() {
            self.save_keywords()?;
        }
        Ok(id)
    }

    pub fn remove_keyword(&mut self, id: &str) -> Result<bool, ScreenerError> {
        let removed = self.keywords.remove(id);
        if removed {
            self.save_keywords()?;
        }
        Ok(removed)
    }

    pub fn toggle_keyword(&mut self, id: &str) -> Result<Option<bool>, ScreenerError> {
        let state = self.keywords.toggle(id);
        if state.is_some() {
            self.save_keywords()?;
        }
        Ok(state)
    }

    pub fn clear_keywords(&mut self) -> Result<(), ScreenerError> {
        self.keywords.clear();
        self.save_keywords()
    }

    /// Drop every keyword and reseed from the trending feed
    pub async fn reset_keywords(&mut self) -> Result<usize, ScreenerError> {
        self.keywords = KeywordSet::new();
        self.save_keywords()?;
        self.seed_keywords().await
    }

    fn save_keywords(&self) -> Result<(), ScreenerError> {
        save_json(self.store.as_ref(), TRENDING_KEY, &self.keywords)?;
        Ok(())
    }

    // ---- settings ----

    pub fn set_refresh_interval(&mut self, seconds: u64) -> Result<u64, ScreenerError> {
        self.settings.set_auto_refresh_interval(seconds);
        self.save_settings()?;
        Ok(self.settings.auto_refresh_interval())
    }

    pub fn toggle_auto_refresh(&mut self) -> Result<bool, ScreenerError> {
        self.settings.toggle_auto_refresh();
        self.save_settings()?;
        Ok(self.settings.auto_refresh_enabled)
    }

    pub fn toggle_show_only_tiered(&mut self) -> Result<bool, ScreenerError> {
        self.settings.toggle_show_only_tiered();
        self.save_settings()?;
        Ok(self.settings.show_only_tiered)
    }

    fn save_settings(&self) -> Result<(), ScreenerError> {
        save_json(self.store.as_ref(), SETTINGS_KEY, &self.settings)?;
        Ok(())
    }

    // ---- polling ----

    /// One polling cycle: scan, then refresh the watchlist
    pub async fn tick(&mut self) -> Result<WatchlistRefresh, ScreenerError> {
        self.scan().await?;
        self.refresh_watchlist().await
    }

    /// Poll on the configured interval until `shutdown` flips to true.
    /// With auto-refresh disabled a single cycle runs.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), ScreenerError> {
        if !self.bootstrapped {
            self.bootstrap().await?;
        }

        if !self.settings.auto_refresh_enabled {
            tracing::info!("Auto-refresh disabled, running a single cycle");
            self.tick().await?;
            return Ok(());
        }

        let period = Duration::from_secs(self.settings.auto_refresh_interval());
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        tracing::info!("Starting screener loop - interval: {:?}", period);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.tick().await {
                        tracing::error!("Tick error: {}", e);
                        // Continue running despite errors
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Screener stopped");
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), ScreenerError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(ScreenerError::InvalidInput(format!(
            "entry price must be a positive number, got {}",
            price
        )))
    }
}
