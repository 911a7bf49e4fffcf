//! Notification Adapters
//!
//! `TracingNotifier` writes notifications to the log. `EventBus` fans them
//! out to in-process subscribers over a tokio broadcast channel.

mod event_bus;
mod tracing_notifier;

pub use event_bus::{EventBus, DEFAULT_BUS_CAPACITY};
pub use tracing_notifier::TracingNotifier;
