//! Display formatting for prices, volumes, percentages, ages and addresses.

use chrono::{DateTime, Utc};

use super::coin::UNKNOWN_AGE_MINUTES;
use super::pair::Liquidity;

/// Format a USD price with precision scaled to its magnitude
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "$0.00".to_string();
    }

    if price < 0.00001 {
        format!("${:.2e}", price)
    } else if price < 0.01 {
        format!("${:.6}", price)
    } else if price < 1.0 {
        format!("${:.4}", price)
    } else if price < 1000.0 {
        format!("${:.2}", price)
    } else {
        format!("${}", format_compact_number(price))
    }
}

/// Format a price given as the API's numeric string
pub fn format_price_str(price: &str) -> String {
    match price.trim().parse::<f64>() {
        Ok(p) => format_price(p),
        Err(_) => "$0.00".to_string(),
    }
}

/// 1.50B / 2.30M / 4.00K / 12.00
pub fn format_compact_number(num: f64) -> String {
    if num >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.2}K", num / 1e3)
    } else {
        format!("{:.2}", num)
    }
}

pub fn format_volume(volume: f64) -> String {
    format!("${}", format_compact_number(volume))
}

/// `N/A` when the pool has no reported liquidity
pub fn format_liquidity(liquidity: Option<&Liquidity>) -> String {
    match liquidity {
        Some(l) if l.usd != 0.0 && l.usd.is_finite() => format_volume(l.usd),
        _ => "N/A".to_string(),
    }
}

/// Signed percentage, e.g. `+12.50%` / `-3.20%`
pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// Relative time for a Unix millis timestamp
pub fn format_time_ago(timestamp_ms: i64, now: DateTime<Utc>) -> String {
    let diff = now.timestamp_millis().saturating_sub(timestamp_ms);

    let minutes = diff.div_euclid(60_000);
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = diff.div_euclid(3_600_000);
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    format!("{}d ago", diff.div_euclid(86_400_000))
}

/// Compact pair age
pub fn format_age_minutes(age_minutes: i64) -> String {
    if age_minutes == UNKNOWN_AGE_MINUTES {
        "unknown".to_string()
    } else if age_minutes < 60 {
        format!("{}m", age_minutes)
    } else if age_minutes < 1440 {
        format!("{}h", age_minutes / 60)
    } else {
        format!("{}d", age_minutes / 1440)
    }
}

/// `ABCD...WXYZ` for long addresses
pub fn truncate_address(address: &str, chars: usize) -> String {
    let len = address.chars().count();
    if len <= chars * 2 {
        return address.to_string();
    }
    let head: String = address.chars().take(chars).collect();
    let tail: String = address.chars().skip(len - chars).collect();
    format!("{}...{}", head, tail)
}
