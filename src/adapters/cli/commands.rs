//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the meme screener.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::adapters::coingecko::CoinGeckoClient;
use crate::adapters::dexscreener::DexScreenerClient;
use crate::adapters::notify::{EventBus, TracingNotifier};
use crate::adapters::rugcheck::RugCheckClient;
use crate::adapters::storage::{JsonFileStore, MemoryStore};
use crate::application::{Screener, ScreenerDeps, ScreenerOptions};
use crate::config::{load_config_or_default, Config, DEFAULT_CONFIG_PATH};
use crate::domain::coin::EnrichedCoin;
use crate::domain::filters::{AgeFilter, CoinFilters};
use crate::domain::format::{
    format_age_minutes, format_liquidity, format_percentage, format_price, format_time_ago, format_volume,
    truncate_address,
};
use crate::domain::security::{risk_label, SecurityReport};
use crate::domain::settings::Settings;
use crate::domain::tier::Tier;
use crate::domain::trading_links::trading_links;
use crate::domain::trending::KeywordSource;
use crate::domain::watchlist::WatchlistEntry;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::notifier::{Notification, Notifier};
use crate::ports::signal_source::{RandomSignalSource, SimulatedSignalSource};
use crate::ports::storage::KeyValueStore;

/// Meme Screener - Solana meme coin discovery and watchlist alerts
#[derive(Parser, Debug)]
#[command(
    name = "meme-screener",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Solana meme coin screener with tiering, scam scores and exit alerts",
    long_about = "Polls DexScreener for Solana pairs matching trending keywords, classifies \
                  each coin into hot/watch/monitor tiers, scores it against a safety checklist \
                  and raises exit signals for coins on the watchlist."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Keep state in memory only (nothing is read from or written to disk)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Seed the simulated safety checks for reproducible output
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and list screened coins
    Scan(ScanCmd),

    /// Search DexScreener for a token
    Search(SearchCmd),

    /// Fetch the RugCheck security report for a token
    Risk(RiskCmd),

    /// Poll continuously and alert on hot coins and exit signals
    Watch(WatchCmd),

    /// Manage tracked coins
    #[command(subcommand)]
    Watchlist(WatchlistCmd),

    /// Manage trending keywords
    #[command(subcommand)]
    Keywords(KeywordsCmd),

    /// Show or change persisted settings
    #[command(subcommand)]
    Settings(SettingsCmd),
}

/// Coin listing filters
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Only show one tier (hot, watch, monitor, none)
    #[arg(long, value_name = "TIER")]
    pub tier: Option<Tier>,

    /// Minimum scam score (0-100)
    #[arg(long, value_name = "N", default_value = "0")]
    pub min_score: u8,

    /// Maximum scam score (0-100)
    #[arg(long, value_name = "N", default_value = "100")]
    pub max_score: u8,

    /// Minimum 24h volume in USD
    #[arg(long, value_name = "USD", default_value = "0")]
    pub min_volume: f64,

    /// Maximum pair age (all, 1m, 5m, 30m, 1h, 2h, 6h, 24h)
    #[arg(long, value_name = "AGE", default_value = "all")]
    pub age: AgeFilter,

    /// Name, symbol or address substring
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Hide coins without a tier
    #[arg(long)]
    pub only_tiered: bool,
}

impl FilterArgs {
    pub fn to_filters(&self) -> CoinFilters {
        CoinFilters {
            search: self.search.clone(),
            tier: self.tier,
            score_range: (self.min_score, self.max_score),
            volume_min: self.min_volume,
            age: self.age,
            only_tiered: self.only_tiered,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Rank the pump feed instead of searching trending keywords
    #[arg(long)]
    pub pump: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum rows to print
    #[arg(short, long, value_name = "N", default_value = "25")]
    pub limit: usize,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SearchCmd {
    /// Token name, symbol or address
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct RiskCmd {
    /// Token mint address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct WatchCmd {
    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Poll the pump feed
    #[arg(long)]
    pub pump: bool,
}

#[derive(Subcommand, Debug)]
pub enum WatchlistCmd {
    /// Track a coin by base token address
    Add {
        #[arg(value_name = "ADDRESS")]
        address: String,
        /// Entry price in USD (defaults to the current price)
        #[arg(long, value_name = "USD")]
        entry_price: Option<f64>,
    },
    /// Stop tracking a coin
    Remove {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
    /// List tracked coins with ROI and exit signals
    List {
        #[arg(long)]
        json: bool,
    },
    /// Override the entry price of a tracked coin
    SetEntry {
        #[arg(value_name = "ADDRESS")]
        address: String,
        #[arg(value_name = "USD")]
        price: f64,
    },
    /// Re-fetch tracked coins and evaluate exit signals
    Refresh,
}

#[derive(Subcommand, Debug)]
pub enum KeywordsCmd {
    /// Add a keyword
    Add {
        #[arg(value_name = "KEYWORD")]
        keyword: String,
        /// twitter, tiktok, custom or coingecko
        #[arg(long, default_value = "custom")]
        source: KeywordSource,
    },
    /// Remove a keyword by id
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Enable or disable a keyword by id
    Toggle {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List keywords
    List,
    /// Remove every keyword
    Clear,
    /// Clear and reseed from the CoinGecko trending feed
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCmd {
    /// Print current settings
    Show,
    /// Set the auto-refresh interval in seconds (30-300)
    Interval {
        #[arg(value_name = "SECONDS")]
        seconds: u64,
    },
    /// Turn auto-refresh on or off
    ToggleAutoRefresh,
    /// Turn the tiered-only listing filter on or off
    ToggleOnlyTiered,
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    let config = load_config_or_default(&app.config)
        .with_context(|| format!("Failed to load configuration from {}", app.config.display()))?;

    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Scan(ref cmd) => scan_command(&app, &config, cmd).await,
        Command::Search(ref cmd) => search_command(&app, &config, cmd).await,
        Command::Risk(ref cmd) => risk_command(&app, &config, cmd).await,
        Command::Watch(ref cmd) => watch_command(&app, &config, cmd).await,
        Command::Watchlist(ref cmd) => watchlist_command(&app, &config, cmd).await,
        Command::Keywords(ref cmd) => keywords_command(&app, &config, cmd).await,
        Command::Settings(ref cmd) => settings_command(&app, &config, cmd).await,
    }
}

/// Initialize logging system. Flags win over `RUST_LOG`, which wins over the config level.
fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}

/// Wire adapters into a screener and hydrate its state
async fn build_screener(app: &CliApp, config: &Config, notifier: Arc<dyn Notifier>) -> Result<Screener> {
    let market_data = DexScreenerClient::with_config(
        config.api.dexscreener_url.clone(),
        config.api.timeout_secs,
        config.api.cache_ttl(),
    )
    .context("Failed to create DexScreener client")?;

    let trending_feed = CoinGeckoClient::with_base_url(config.api.coingecko_url.clone())
        .context("Failed to create CoinGecko client")?;

    let security = RugCheckClient::with_config(
        config.api.rugcheck_url.clone(),
        config.api.timeout_secs,
        config.api.security_cache_ttl(),
    )
    .context("Failed to create RugCheck client")?;

    let store: Arc<dyn KeyValueStore> = if app.ephemeral {
        tracing::info!("Ephemeral mode - state is not persisted");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(JsonFileStore::new(config.storage.data_dir_path()))
    };

    let signals: Box<dyn SimulatedSignalSource + Send> = match app.seed {
        Some(seed) => Box::new(RandomSignalSource::seeded(seed)),
        None => Box::new(RandomSignalSource::new()),
    };

    let mut initial_settings = Settings::default();
    initial_settings.set_auto_refresh_interval(config.refresh.interval().as_secs());

    let mut screener = Screener::new(
        ScreenerDeps {
            market_data: Arc::new(market_data),
            trending_feed: Arc::new(trending_feed),
            security: Arc::new(security),
            store,
            notifier,
            clock: Arc::new(SystemClock),
            signals,
        },
        ScreenerOptions {
            pump_mode: config.refresh.pump_mode,
            notify_hot: config.refresh.notify_hot,
            pump_cache_ttl: config.api.pump_cache_ttl(),
            initial_settings,
        },
    );

    screener.bootstrap().await.context("Failed to load screener state")?;
    Ok(screener)
}

/// Handle scan command
async fn scan_command(app: &CliApp, config: &Config, cmd: &ScanCmd) -> Result<()> {
    let mut screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;
    if cmd.pump {
        screener.set_pump_mode(true);
    }

    screener.scan().await?;
    let coins = screener.filtered_coins(&cmd.filters.to_filters());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&coins)?);
    } else {
        let mode = if screener.pump_mode() { "pump feed" } else { "trending" };
        println!("{} coins ({}), showing {}", coins.len(), mode, coins.len().min(cmd.limit));
        print_coin_table(&coins[..coins.len().min(cmd.limit)]);
    }

    Ok(())
}

/// Handle search command
async fn search_command(app: &CliApp, config: &Config, cmd: &SearchCmd) -> Result<()> {
    let mut screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;
    let coins = screener
        .search(&cmd.query)
        .await
        .with_context(|| format!("Search for '{}' failed", cmd.query))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&coins)?);
    } else if let Some(top) = coins.first() {
        print_coin_table(&coins);
        println!();
        println!("Trade {}:", top.symbol());
        print_trading_links(top.address());
    } else {
        println!("No Solana pairs found for '{}'", cmd.query);
    }

    Ok(())
}

/// Handle risk command
async fn risk_command(app: &CliApp, config: &Config, cmd: &RiskCmd) -> Result<()> {
    let screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;
    let report = screener.security_report(&cmd.address).await;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_security_report(&cmd.address, report.as_ref());
    println!();
    print_trading_links(&cmd.address);
    Ok(())
}

/// Handle watch command
async fn watch_command(app: &CliApp, config: &Config, cmd: &WatchCmd) -> Result<()> {
    let bus = EventBus::new();
    let mut rx = bus.subscribe();

    // Subscriber echoes alerts to stdout and the log
    let printer = tokio::spawn(async move {
        let log = TracingNotifier;
        loop {
            match rx.recv().await {
                Ok(notification) => {
                    log.notify(&notification);
                    print_notification(&notification);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Alert printer lagged, skipped {} notifications", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut screener = build_screener(app, config, Arc::new(bus.clone())).await?;
    if cmd.pump {
        screener.set_pump_mode(true);
    }

    if cmd.once {
        let report = screener.tick().await?;
        print_coin_table(&screener.coins()[..screener.coins().len().min(25)]);
        println!(
            "Watchlist: {} updated, {} missing, {} with danger signals",
            report.updated,
            report.missing.len(),
            report.danger.len()
        );
    } else {
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
            shutdown_tx.send(true).ok();
        });

        println!(
            "Watching every {}s (Ctrl+C to stop)",
            screener.settings().auto_refresh_interval()
        );
        screener.run(shutdown_rx).await?;
    }

    drop(screener);
    drop(bus);
    printer.await.ok();
    Ok(())
}

async fn watchlist_command(app: &CliApp, config: &Config, cmd: &WatchlistCmd) -> Result<()> {
    let mut screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;

    match cmd {
        WatchlistCmd::Add { address, entry_price } => {
            if screener.watch(address, *entry_price).await? {
                println!("Added {} to watchlist", address);
            } else {
                println!("{} is already on the watchlist", address);
            }
        }
        WatchlistCmd::Remove { address } => {
            if screener.unwatch(address)? {
                println!("Removed {} from watchlist", address);
            } else {
                println!("{} is not on the watchlist", address);
            }
        }
        WatchlistCmd::SetEntry { address, price } => {
            if screener.set_entry_price(address, *price)? {
                println!("Entry price for {} set to {}", address, format_price(*price));
            } else {
                println!("{} is not on the watchlist", address);
            }
        }
        WatchlistCmd::Refresh => {
            let report = screener.refresh_watchlist().await?;
            println!(
                "{} updated, {} missing, {} with danger signals",
                report.updated,
                report.missing.len(),
                report.danger.len()
            );
            print_watchlist(screener.watchlist().entries(), SystemClock.now());
        }
        WatchlistCmd::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(screener.watchlist())?);
            } else {
                print_watchlist(screener.watchlist().entries(), SystemClock.now());
            }
        }
    }

    Ok(())
}

async fn keywords_command(app: &CliApp, config: &Config, cmd: &KeywordsCmd) -> Result<()> {
    let mut screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;

    match cmd {
        KeywordsCmd::Add { keyword, source } => match screener.add_keyword(keyword, *source)? {
            Some(id) => println!("Added '{}' ({})", keyword.trim().to_lowercase(), id),
            None => println!("'{}' is blank or already tracked", keyword.trim()),
        },
        KeywordsCmd::Remove { id } => {
            if screener.remove_keyword(id)? {
                println!("Removed {}", id);
            } else {
                println!("No keyword with id {}", id);
            }
        }
        KeywordsCmd::Toggle { id } => match screener.toggle_keyword(id)? {
            Some(true) => println!("{} enabled", id),
            Some(false) => println!("{} disabled", id),
            None => println!("No keyword with id {}", id),
        },
        KeywordsCmd::Clear => {
            screener.clear_keywords()?;
            println!("Cleared all keywords");
        }
        KeywordsCmd::Reset => {
            let added = screener
                .reset_keywords()
                .await
                .context("Failed to reseed keywords from CoinGecko")?;
            println!("Reseeded {} keywords from CoinGecko", added);
        }
        KeywordsCmd::List => {}
    }

    let now = SystemClock.now();
    println!();
    println!("{:<9} {:<20} {:<10} {:<7} ADDED", "ID", "KEYWORD", "SOURCE", "ACTIVE");
    for k in screener.keywords().keywords() {
        println!(
            "{:<9} {:<20} {:<10} {:<7} {}",
            k.id,
            k.keyword,
            k.source,
            if k.is_active { "yes" } else { "no" },
            format_time_ago(k.added_at, now)
        );
    }

    Ok(())
}

async fn settings_command(app: &CliApp, config: &Config, cmd: &SettingsCmd) -> Result<()> {
    let mut screener = build_screener(app, config, Arc::new(TracingNotifier)).await?;

    match cmd {
        SettingsCmd::Show => {}
        SettingsCmd::Interval { seconds } => {
            let applied = screener.set_refresh_interval(*seconds)?;
            if applied != *seconds {
                println!("Interval clamped to {}s", applied);
            }
        }
        SettingsCmd::ToggleAutoRefresh => {
            screener.toggle_auto_refresh()?;
        }
        SettingsCmd::ToggleOnlyTiered => {
            screener.toggle_show_only_tiered()?;
        }
    }

    let settings = screener.settings();
    println!("Auto-refresh:     {}", if settings.auto_refresh_enabled { "on" } else { "off" });
    println!("Refresh interval: {}s", settings.auto_refresh_interval());
    println!("Only tiered:      {}", if settings.show_only_tiered { "on" } else { "off" });
    Ok(())
}

fn print_coin_table(coins: &[EnrichedCoin]) {
    println!(
        "{:<8} {:<10} {:<13} {:>12} {:>10} {:>10} {:>9} {:>6} {:>8}  TREND",
        "TIER", "SYMBOL", "ADDRESS", "PRICE", "VOL 24H", "LIQ", "1H", "SCORE", "AGE"
    );
    for coin in coins {
        let pair = coin.pair();
        println!(
            "{:<8} {:<10} {:<13} {:>12} {:>10} {:>10} {:>9} {:>6} {:>8}  {}",
            coin.tier().label(),
            coin.symbol(),
            truncate_address(coin.address(), 4),
            format_price(coin.price_usd()),
            format_volume(pair.volume.h24),
            format_liquidity(pair.liquidity.as_ref()),
            format_percentage(pair.price_change.h1),
            coin.scam_score().score,
            format_age_minutes(coin.age_minutes()),
            coin.trending_keywords().join(",")
        );
    }
}

fn print_watchlist(entries: &[WatchlistEntry], now: chrono::DateTime<chrono::Utc>) {
    if entries.is_empty() {
        println!("Watchlist is empty");
        return;
    }

    for entry in entries {
        let coin = entry.coin();
        println!(
            "{}{} ({})  price {}  entry {}  ROI {}  added {}",
            if entry.has_danger_signal() { "⚠ " } else { "" },
            coin.symbol(),
            truncate_address(coin.address(), 4),
            format_price(coin.price_usd()),
            entry.entry_price().map(format_price).unwrap_or_else(|| "-".to_string()),
            format_percentage(entry.roi_pct()),
            format_time_ago(entry.added_at(), now)
        );

        let targets: Vec<String> = entry
            .take_profit_levels()
            .iter()
            .map(|l| {
                format!(
                    "{}x {}{}",
                    l.multiple,
                    format_price(l.target_price),
                    if l.reached { " ✓" } else { "" }
                )
            })
            .collect();
        println!("    targets: {}", targets.join("  "));

        for signal in entry.exit_signals() {
            println!("    [{}] {}", signal.severity, signal.message);
        }

        let links: Vec<String> = trading_links(coin.address())
            .into_iter()
            .map(|l| format!("{} {}", l.name, l.url))
            .collect();
        println!("    trade: {}", links.join("\n           "));
    }
}

fn print_trading_links(address: &str) {
    for link in trading_links(address) {
        println!("  {:<8} {}", link.name, link.url);
    }
}

fn print_security_report(address: &str, report: Option<&SecurityReport>) {
    println!("Security report for {}", address);
    match report {
        Some(r) => {
            println!("  Risk:             {} (score {})", risk_label(Some(r)), r.score);
            println!("  Rugged:           {}", if r.rugged { "YES" } else { "no" });
            println!("  Liquidity locked: {}", if r.is_liquidity_locked { "yes" } else { "no" });
            println!("  Mintable:         {}", if r.is_mintable { "yes" } else { "no" });
            println!("  Freezable:        {}", if r.is_freezable { "yes" } else { "no" });
        }
        None => {
            println!("  Risk:             {} (no report available)", risk_label(None));
        }
    }
}

fn print_notification(notification: &Notification) {
    match notification {
        Notification::ExitDanger { symbol, signals, .. } => {
            for signal in signals {
                println!("⚠ {}: {}", symbol, signal.message);
            }
        }
        Notification::HotCoin { symbol, scam_score, .. } => {
            println!("🔥 {} is HOT (scam score {})", symbol, scam_score);
        }
        Notification::RefreshFailed { reason } => {
            println!("Refresh failed: {}", reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_app_parse_scan() {
        let args = vec!["meme-screener", "scan"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert!(!cmd.pump);
                assert!(!cmd.json);
                assert_eq!(cmd.limit, 25);
                assert_eq!(cmd.filters.to_filters(), CoinFilters::default());
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_app_parse_scan_with_filters() {
        let args = vec![
            "meme-screener", "scan", "--pump", "--tier", "hot", "--min-score", "60", "--age", "30m", "--json",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert!(cmd.pump);
                assert!(cmd.json);
                let filters = cmd.filters.to_filters();
                assert_eq!(filters.tier, Some(Tier::Hot));
                assert_eq!(filters.score_range, (60, 100));
                assert_eq!(filters.age, AgeFilter::ThirtyMinutes);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_app_rejects_unknown_tier() {
        let args = vec!["meme-screener", "scan", "--tier", "lukewarm"];
        assert!(CliApp::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_app_parse_search() {
        let app = CliApp::try_parse_from(vec!["meme-screener", "search", "dog wif"]).unwrap();
        match app.command {
            Command::Search(cmd) => assert_eq!(cmd.query, "dog wif"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_app_parse_risk() {
        let app = CliApp::try_parse_from(vec!["meme-screener", "risk", "Mint111", "--json"]).unwrap();
        match app.command {
            Command::Risk(cmd) => {
                assert_eq!(cmd.address, "Mint111");
                assert!(cmd.json);
            }
            _ => panic!("Expected Risk command"),
        }

        assert!(CliApp::try_parse_from(vec!["meme-screener", "risk"]).is_err());
    }

    #[test]
    fn test_cli_app_parse_watch_once() {
        let app = CliApp::try_parse_from(vec!["meme-screener", "watch", "--once"]).unwrap();
        match app.command {
            Command::Watch(cmd) => {
                assert!(cmd.once);
                assert!(!cmd.pump);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_app_parse_watchlist_add() {
        let args = vec!["meme-screener", "watchlist", "add", "Mint111", "--entry-price", "0.002"];
        let app = CliApp::try_parse_from(args).unwrap();
        match app.command {
            Command::Watchlist(WatchlistCmd::Add { address, entry_price }) => {
                assert_eq!(address, "Mint111");
                assert_eq!(entry_price, Some(0.002));
            }
            _ => panic!("Expected Watchlist Add command"),
        }
    }

    #[test]
    fn test_cli_app_parse_watchlist_set_entry() {
        let args = vec!["meme-screener", "watchlist", "set-entry", "Mint111", "1.5"];
        let app = CliApp::try_parse_from(args).unwrap();
        assert!(matches!(
            app.command,
            Command::Watchlist(WatchlistCmd::SetEntry { ref address, price }) if address == "Mint111" && price == 1.5
        ));
    }

    #[test]
    fn test_cli_app_parse_keywords() {
        let args = vec!["meme-screener", "keywords", "add", "pepe", "--source", "twitter"];
        let app = CliApp::try_parse_from(args).unwrap();
        match app.command {
            Command::Keywords(KeywordsCmd::Add { keyword, source }) => {
                assert_eq!(keyword, "pepe");
                assert_eq!(source, KeywordSource::Twitter);
            }
            _ => panic!("Expected Keywords Add command"),
        }

        let app = CliApp::try_parse_from(vec!["meme-screener", "keywords", "reset"]).unwrap();
        assert!(matches!(app.command, Command::Keywords(KeywordsCmd::Reset)));
    }

    #[test]
    fn test_cli_app_parse_settings_interval() {
        let app = CliApp::try_parse_from(vec!["meme-screener", "settings", "interval", "90"]).unwrap();
        assert!(matches!(app.command, Command::Settings(SettingsCmd::Interval { seconds: 90 })));
    }

    #[test]
    fn test_global_flags() {
        let args = vec![
            "meme-screener", "scan", "-v", "--debug", "--ephemeral", "--seed", "7", "-c", "alt.toml",
        ];
        let app = CliApp::try_parse_from(args).unwrap();
        assert!(app.verbose);
        assert!(app.debug);
        assert!(app.ephemeral);
        assert_eq!(app.seed, Some(7));
        assert_eq!(app.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn test_default_config_path() {
        let app = CliApp::try_parse_from(vec!["meme-screener", "keywords", "list"]).unwrap();
        assert_eq!(app.config, PathBuf::from("config/screener.toml"));
        assert!(!app.ephemeral);
    }
}
