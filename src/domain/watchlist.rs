//! Watchlist
//!
//! Tracked coins with entry price, take-profit targets and exit signals.
//! Entries are keyed by base token address and replaced by value on every
//! update; exit signals are only ever set from the evaluator's output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coin::EnrichedCoin;
use super::exit_signals::{generate_exit_signals, ExitSignal, Severity};
use crate::ports::signal_source::SimulatedSignalSource;

/// Take-profit multiples tracked for every entry
pub const TARGET_MULTIPLES: [f64; 3] = [2.0, 5.0, 10.0];

/// One take-profit rung
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeProfitLevel {
    pub multiple: f64,
    pub target_price: f64,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    coin: EnrichedCoin,
    /// Unix millis
    added_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entry_price: Option<f64>,
    target_multiples: Vec<f64>,
    #[serde(default)]
    exit_signals: Vec<ExitSignal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl WatchlistEntry {
    /// New entry with no signals. A missing or non-positive entry price falls
    /// back to the coin's current USD price.
    pub fn new(coin: EnrichedCoin, entry_price: Option<f64>, now: DateTime<Utc>) -> Self {
        let entry_price = entry_price
            .filter(|p| p.is_finite() && *p > 0.0)
            .or_else(|| Some(coin.price_usd()).filter(|p| *p > 0.0));

        Self {
            coin,
            added_at: now.timestamp_millis(),
            entry_price,
            target_multiples: TARGET_MULTIPLES.to_vec(),
            exit_signals: Vec::new(),
            notes: None,
        }
    }

    pub fn coin(&self) -> &EnrichedCoin {
        &self.coin
    }

    pub fn address(&self) -> &str {
        self.coin.address()
    }

    pub fn added_at(&self) -> i64 {
        self.added_at
    }

    pub fn entry_price(&self) -> Option<f64> {
        self.entry_price
    }

    pub fn target_multiples(&self) -> &[f64] {
        &self.target_multiples
    }

    pub fn exit_signals(&self) -> &[ExitSignal] {
        &self.exit_signals
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn has_danger_signal(&self) -> bool {
        self.exit_signals.iter().any(|s| s.severity == Severity::Danger)
    }

    /// Entry price, or current price when none was recorded
    fn effective_entry_price(&self) -> f64 {
        self.entry_price.unwrap_or_else(|| self.coin.price_usd())
    }

    /// Return on entry in percent; 0 without a usable entry price
    pub fn roi_pct(&self) -> f64 {
        let entry = self.effective_entry_price();
        if entry <= 0.0 {
            return 0.0;
        }
        ((self.coin.price_usd() - entry) / entry) * 100.0
    }

    /// Current price as a multiple of entry; 0 without a usable entry price
    pub fn roi_multiple(&self) -> f64 {
        let entry = self.effective_entry_price();
        if entry <= 0.0 {
            return 0.0;
        }
        self.coin.price_usd() / entry
    }

    pub fn take_profit_levels(&self) -> Vec<TakeProfitLevel> {
        let entry = self.effective_entry_price();
        let current = self.coin.price_usd();
        self.target_multiples
            .iter()
            .map(|&multiple| {
                let target_price = entry * multiple;
                TakeProfitLevel {
                    multiple,
                    target_price,
                    reached: target_price > 0.0 && current >= target_price,
                }
            })
            .collect()
    }

    /// Copy of this entry holding a freshly processed coin. Signals are left
    /// untouched; callers must replace them with the evaluator's output.
    fn with_coin(&self, coin: EnrichedCoin) -> Self {
        Self { coin, ..self.clone() }
    }

    fn with_signals(mut self, exit_signals: Vec<ExitSignal>) -> Self {
        self.exit_signals = exit_signals;
        self
    }
}

/// Ordered collection of watchlist entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.iter().any(|e| e.address() == address)
    }

    pub fn get(&self, address: &str) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.address() == address)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.address().to_string()).collect()
    }

    /// Track a coin. Returns false if it is already on the list.
    pub fn add(&mut self, coin: EnrichedCoin, entry_price: Option<f64>, now: DateTime<Utc>) -> bool {
        if self.contains(coin.address()) {
            return false;
        }
        self.entries.push(WatchlistEntry::new(coin, entry_price, now));
        true
    }

    /// Stop tracking a coin; its entry is dropped with it
    pub fn remove(&mut self, address: &str) -> Option<WatchlistEntry> {
        let idx = self.entries.iter().position(|e| e.address() == address)?;
        Some(self.entries.remove(idx))
    }

    /// User override of the entry price
    pub fn update_entry_price(&mut self, address: &str, price: f64) -> bool {
        match self.entries.iter_mut().find(|e| e.address() == address) {
            Some(entry) => {
                entry.entry_price = Some(price);
                true
            }
            None => false,
        }
    }

    /// Replace the tracked coin and recompute signals against the previous snapshot.
    /// Returns the new signals, or `None` if the coin is not tracked.
    pub fn update_coin<S>(&mut self, coin: EnrichedCoin, signals: &mut S, now: DateTime<Utc>) -> Option<&[ExitSignal]>
    where
        S: SimulatedSignalSource + ?Sized,
    {
        let idx = self.entries.iter().position(|e| e.address() == coin.address())?;
        let previous = &self.entries[idx];
        let updated = previous.with_coin(coin);
        let exit_signals = generate_exit_signals(&updated, Some(previous), signals, now);
        self.entries[idx] = updated.with_signals(exit_signals);
        Some(self.entries[idx].exit_signals())
    }

    /// Recompute signals for every entry without a previous snapshot
    pub fn refresh_exit_signals<S>(&mut self, signals: &mut S, now: DateTime<Utc>)
    where
        S: SimulatedSignalSource + ?Sized,
    {
        let refreshed: Vec<WatchlistEntry> = self
            .entries
            .iter()
            .map(|entry| {
                let exit_signals = generate_exit_signals(entry, None, signals, now);
                entry.clone().with_signals(exit_signals)
            })
            .collect();
        self.entries = refreshed;
    }
}
