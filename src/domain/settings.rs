//! User settings persisted alongside the watchlist and keywords.

use serde::{Deserialize, Serialize};

pub const MIN_REFRESH_INTERVAL_SECS: u64 = 30;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    auto_refresh_interval: u64,
    pub auto_refresh_enabled: bool,
    pub show_only_tiered: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_refresh_interval: DEFAULT_REFRESH_INTERVAL_SECS,
            auto_refresh_enabled: true,
            show_only_tiered: false,
        }
    }
}

impl Settings {
    pub fn auto_refresh_interval(&self) -> u64 {
        self.auto_refresh_interval.clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS)
    }

    /// Set the poll interval, clamped to 30-300 seconds
    pub fn set_auto_refresh_interval(&mut self, seconds: u64) {
        self.auto_refresh_interval = seconds.clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS);
    }

    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh_enabled = !self.auto_refresh_enabled;
    }

    pub fn toggle_show_only_tiered(&mut self) {
        self.show_only_tiered = !self.show_only_tiered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_clamped() {
        let mut s = Settings::default();
        assert_eq!(s.auto_refresh_interval(), 60);

        s.set_auto_refresh_interval(5);
        assert_eq!(s.auto_refresh_interval(), 30);

        s.set_auto_refresh_interval(1_000);
        assert_eq!(s.auto_refresh_interval(), 300);
    }

    #[test]
    fn test_stored_out_of_range_value_is_clamped_on_read() {
        let s: Settings = serde_json::from_str(
            r#"{"autoRefreshInterval": 2, "autoRefreshEnabled": false, "showOnlyTiered": true}"#,
        )
        .unwrap();
        assert_eq!(s.auto_refresh_interval(), 30);
        assert!(!s.auto_refresh_enabled);
    }

    #[test]
    fn test_toggles() {
        let mut s = Settings::default();
        s.toggle_auto_refresh();
        s.toggle_show_only_tiered();
        assert!(!s.auto_refresh_enabled);
        assert!(s.show_only_tiered);
    }
}
