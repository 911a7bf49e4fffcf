//! Exit Signal Evaluator
//!
//! Derives sell alerts for a watchlisted coin. The output always replaces the
//! entry's previous signal list; signals are never appended incrementally.
//!
//! Signals are emitted in evaluation order (volume drop, RSI, whale selling),
//! not severity order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::watchlist::WatchlistEntry;
use crate::ports::signal_source::SimulatedSignalSource;

/// Current 24h volume below this fraction of the previous snapshot triggers a drop alert
pub const VOLUME_DROP_RATIO: f64 = 0.5;
/// Placeholder RSI above this is overbought
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// 1h sells above this multiple of buys is whale selling
pub const WHALE_SELL_RATIO: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitSignalType {
    WhaleSelling,
    VolumeDrop,
    RsiOverbought,
}

impl fmt::Display for ExitSignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitSignalType::WhaleSelling => write!(f, "whale_selling"),
            ExitSignalType::VolumeDrop => write!(f, "volume_drop"),
            ExitSignalType::RsiOverbought => write!(f, "rsi_overbought"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSignal {
    #[serde(rename = "type")]
    pub signal_type: ExitSignalType,
    pub message: String,
    pub severity: Severity,
    /// Unix millis
    pub timestamp: i64,
}

impl ExitSignal {
    fn new(signal_type: ExitSignalType, message: impl Into<String>, severity: Severity, now: DateTime<Utc>) -> Self {
        Self {
            signal_type,
            message: message.into(),
            severity,
            timestamp: now.timestamp_millis(),
        }
    }
}

/// Evaluate exit signals for `current`, comparing against `previous` when given.
pub fn generate_exit_signals<S>(
    current: &WatchlistEntry,
    previous: Option<&WatchlistEntry>,
    signals: &mut S,
    now: DateTime<Utc>,
) -> Vec<ExitSignal>
where
    S: SimulatedSignalSource + ?Sized,
{
    let mut out = Vec::new();
    let pair = current.coin().pair();

    if let Some(previous) = previous {
        let previous_volume = previous.coin().pair().volume.h24;
        let current_volume = pair.volume.h24;
        if previous_volume > 0.0 && current_volume < previous_volume * VOLUME_DROP_RATIO {
            out.push(ExitSignal::new(
                ExitSignalType::VolumeDrop,
                "Volume dropped >50% in 24h",
                Severity::Warning,
                now,
            ));
        }
    }

    // Placeholder reading, not computed from candles
    let rsi = signals.rsi();
    if rsi > RSI_OVERBOUGHT {
        out.push(ExitSignal::new(
            ExitSignalType::RsiOverbought,
            format!("RSI is overbought ({})", rsi.round() as i64),
            Severity::Warning,
            now,
        ));
    }

    let txns = pair.txns.h1;
    if txns.sells > txns.buys.saturating_mul(WHALE_SELL_RATIO) {
        out.push(ExitSignal::new(
            ExitSignalType::WhaleSelling,
            "High sell pressure detected",
            Severity::Danger,
            now,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::process_coin;
    use crate::domain::pair::PairRecord;
    use crate::ports::signal_source::ScriptedSignalSource;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(NOW_MS).unwrap()
    }

    fn entry(volume_24h: f64, buys: u64, sells: u64) -> WatchlistEntry {
        let mut p = PairRecord::default();
        p.base_token.address = "Mint1".to_string();
        p.price_usd = "1.0".to_string();
        p.volume.h24 = volume_24h;
        p.txns.h1.buys = buys;
        p.txns.h1.sells = sells;
        let coin = process_coin(p, &[], now(), &mut ScriptedSignalSource::all_pass());
        WatchlistEntry::new(coin, None, now())
    }

    fn types(signals: &[ExitSignal]) -> Vec<ExitSignalType> {
        signals.iter().map(|s| s.signal_type).collect()
    }

    #[test]
    fn test_no_previous_never_volume_drop() {
        let current = entry(10.0, 0, 0);
        let signals = generate_exit_signals(&current, None, &mut ScriptedSignalSource::all_pass(), now());
        assert!(signals.is_empty());
    }

    #[test]
    fn test_volume_drop() {
        let previous = entry(100_000.0, 0, 0);
        let current = entry(49_999.0, 0, 0);
        let signals = generate_exit_signals(&current, Some(&previous), &mut ScriptedSignalSource::all_pass(), now());

        assert_eq!(types(&signals), vec![ExitSignalType::VolumeDrop]);
        assert_eq!(signals[0].message, "Volume dropped >50% in 24h");
        assert_eq!(signals[0].severity, Severity::Warning);
        assert_eq!(signals[0].timestamp, NOW_MS);
    }

    #[test]
    fn test_volume_exactly_half_no_drop() {
        let previous = entry(100_000.0, 0, 0);
        let current = entry(50_000.0, 0, 0);
        let signals = generate_exit_signals(&current, Some(&previous), &mut ScriptedSignalSource::all_pass(), now());
        assert!(signals.is_empty());
    }

    #[test]
    fn test_zero_previous_volume_no_drop() {
        let previous = entry(0.0, 0, 0);
        let current = entry(0.0, 0, 0);
        let signals = generate_exit_signals(&current, Some(&previous), &mut ScriptedSignalSource::all_pass(), now());
        assert!(signals.is_empty());
    }

    #[test]
    fn test_rsi_overbought() {
        let current = entry(10.0, 0, 0);
        let mut source = ScriptedSignalSource::all_pass().with_rsi(74.6);
        let signals = generate_exit_signals(&current, None, &mut source, now());

        assert_eq!(types(&signals), vec![ExitSignalType::RsiOverbought]);
        assert_eq!(signals[0].message, "RSI is overbought (75)");

        let mut source = ScriptedSignalSource::all_pass().with_rsi(70.0);
        assert!(generate_exit_signals(&current, None, &mut source, now()).is_empty());
    }

    #[test]
    fn test_rsi_message_rounds_half_up() {
        let current = entry(10.0, 0, 0);
        let mut source = ScriptedSignalSource::all_pass().with_rsi(70.5);
        let signals = generate_exit_signals(&current, None, &mut source, now());

        assert_eq!(signals[0].message, "RSI is overbought (71)");
    }

    #[test]
    fn test_whale_selling_threshold() {
        let present = entry(10.0, 4, 10);
        let signals = generate_exit_signals(&present, None, &mut ScriptedSignalSource::all_pass(), now());
        assert_eq!(types(&signals), vec![ExitSignalType::WhaleSelling]);
        assert_eq!(signals[0].severity, Severity::Danger);

        let absent = entry(10.0, 6, 10);
        let signals = generate_exit_signals(&absent, None, &mut ScriptedSignalSource::all_pass(), now());
        assert!(signals.is_empty());

        // exactly 2x is not enough
        let boundary = entry(10.0, 5, 10);
        assert!(generate_exit_signals(&boundary, None, &mut ScriptedSignalSource::all_pass(), now()).is_empty());
    }

    #[test]
    fn test_evaluation_order() {
        let previous = entry(100_000.0, 0, 0);
        let current = entry(1_000.0, 1, 10);
        let mut source = ScriptedSignalSource::all_pass().with_rsi(79.0);
        let signals = generate_exit_signals(&current, Some(&previous), &mut source, now());

        assert_eq!(
            types(&signals),
            vec![
                ExitSignalType::VolumeDrop,
                ExitSignalType::RsiOverbought,
                ExitSignalType::WhaleSelling,
            ]
        );
    }

    #[test]
    fn test_signal_serde_shape() {
        let signal = ExitSignal::new(ExitSignalType::WhaleSelling, "x", Severity::Danger, now());
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["type"], "whale_selling");
        assert_eq!(json["severity"], "danger");
    }
}
