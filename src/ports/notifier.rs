//! Outbound notifications raised by the screener.

use serde::{Deserialize, Serialize};

use crate::domain::exit_signals::ExitSignal;
use crate::domain::tier::Tier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A watchlisted coin produced at least one danger-severity exit signal
    ExitDanger {
        address: String,
        symbol: String,
        signals: Vec<ExitSignal>,
    },
    /// A coin entered the hot tier on this refresh
    HotCoin {
        address: String,
        symbol: String,
        tier: Tier,
        scam_score: u8,
    },
    RefreshFailed {
        reason: String,
    },
}

impl Notification {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Notification::ExitDanger { symbol, .. } | Notification::HotCoin { symbol, .. } => Some(symbol),
            Notification::RefreshFailed { .. } => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}
