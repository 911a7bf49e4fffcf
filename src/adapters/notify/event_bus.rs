use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

use crate::ports::notifier::{Notification, Notifier};

pub const DEFAULT_BUS_CAPACITY: usize = 1000;

/// Publish/subscribe fan-out of screener notifications
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Notification>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    #[instrument]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        debug!(capacity, "EventBus initialized");
        Self { tx }
    }

    /// Number of subscribers that received the notification (0 when nobody listens)
    #[instrument(skip(self, notification))]
    pub fn publish(&self, notification: Notification) -> usize {
        let symbol = notification.symbol().unwrap_or("-").to_string();
        match self.tx.send(notification) {
            Ok(subscriber_count) => {
                info!(symbol = %symbol, subscriber_count, "Published notification");
                subscriber_count
            }
            Err(_) => {
                debug!(symbol = %symbol, "No subscribers for notification");
                0
            }
        }
    }

    #[instrument(skip(self))]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        let receiver = self.tx.subscribe();
        debug!("New subscriber added to event bus");
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for EventBus {
    fn notify(&self, notification: &Notification) {
        self.publish(notification.clone());
    }
}
