use tracing::{info, warn};

use crate::ports::notifier::{Notification, Notifier};

/// Logs every notification at a level matching its urgency
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::ExitDanger { address, symbol, signals } => {
                for signal in signals {
                    warn!(
                        symbol = %symbol,
                        address = %address,
                        signal = %signal.signal_type,
                        severity = %signal.severity,
                        "Exit signal: {}",
                        signal.message
                    );
                }
            }
            Notification::HotCoin { address, symbol, tier, scam_score } => {
                info!(
                    symbol = %symbol,
                    address = %address,
                    tier = %tier,
                    scam_score = scam_score,
                    "Coin entered {} tier",
                    tier
                );
            }
            Notification::RefreshFailed { reason } => {
                warn!(reason = %reason, "Refresh failed");
            }
        }
    }
}
