//! DexScreener Pair Record
//!
//! Raw market pair data as returned by the DexScreener `latest/dex` endpoints.
//! Field names follow the wire format (camelCase). Numeric windows that the API
//! omits deserialize to zero so downstream heuristics never see missing values.

use serde::{Deserialize, Serialize};

/// Chain id DexScreener uses for Solana pairs
pub const SOLANA_CHAIN_ID: &str = "solana";

/// Base or quote token identity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenRef {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// Pool liquidity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Liquidity {
    #[serde(default)]
    pub usd: f64,
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub quote: f64,
}

/// A figure bucketed by the four DexScreener windows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Windowed {
    #[serde(default)]
    pub m5: f64,
    #[serde(default)]
    pub h1: f64,
    #[serde(default)]
    pub h6: f64,
    #[serde(default)]
    pub h24: f64,
}

/// Buy/sell transaction counts for one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxnCount {
    #[serde(default)]
    pub buys: u64,
    #[serde(default)]
    pub sells: u64,
}

/// Transaction counts per window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Txns {
    #[serde(default)]
    pub m5: TxnCount,
    #[serde(default)]
    pub h1: TxnCount,
    #[serde(default)]
    pub h6: TxnCount,
    #[serde(default)]
    pub h24: TxnCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteLink {
    #[serde(default)]
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Optional presentation metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub websites: Vec<WebsiteLink>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// A trading pair as reported by DexScreener
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    pub chain_id: String,
    pub dex_id: String,
    #[serde(default)]
    pub url: String,
    pub pair_address: String,
    pub base_token: TokenRef,
    pub quote_token: TokenRef,
    #[serde(default)]
    pub price_native: String,
    #[serde(default)]
    pub price_usd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<Liquidity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    /// Pair creation time (Unix millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_created_at: Option<i64>,
    #[serde(default)]
    pub volume: Windowed,
    #[serde(default)]
    pub price_change: Windowed,
    #[serde(default)]
    pub txns: Txns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PairInfo>,
}

impl PairRecord {
    /// Liquidity in USD, zero when the pool reports none
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.map(|l| l.usd).unwrap_or(0.0)
    }

    /// Parsed USD price, zero when the string is not a number
    pub fn price_usd_value(&self) -> f64 {
        self.price_usd.trim().parse::<f64>().ok().filter(|p| p.is_finite()).unwrap_or(0.0)
    }

    pub fn is_solana(&self) -> bool {
        self.chain_id == SOLANA_CHAIN_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chainId": "solana",
        "dexId": "raydium",
        "url": "https://dexscreener.com/solana/pair1",
        "pairAddress": "Pair1111111111111111111111111111111111111111",
        "baseToken": { "address": "Mint111", "name": "Pepe Coin", "symbol": "PEPE" },
        "quoteToken": { "address": "So11111111111111111111111111111111111111112", "name": "Wrapped SOL", "symbol": "SOL" },
        "priceNative": "0.0000012",
        "priceUsd": "0.00021",
        "txns": { "h1": { "buys": 40, "sells": 12 } },
        "volume": { "h24": 152000.5, "h6": 30000, "h1": 4000, "m5": 120 },
        "priceChange": { "h1": 12.5, "h24": -3.2 },
        "liquidity": { "usd": 45000, "base": 1000000, "quote": 120 },
        "fdv": 210000,
        "pairCreatedAt": 1700000000000,
        "info": {
            "imageUrl": "https://cdn.example/pepe.png",
            "socials": [{ "type": "twitter", "url": "https://x.com/pepe" }]
        }
    }"#;

    #[test]
    fn test_deserialize_dexscreener_pair() {
        let pair: PairRecord = serde_json::from_str(SAMPLE).unwrap();

        assert!(pair.is_solana());
        assert_eq!(pair.base_token.symbol, "PEPE");
        assert_eq!(pair.txns.h1.buys, 40);
        assert_eq!(pair.txns.h24, TxnCount::default());
        assert_eq!(pair.price_change.m5, 0.0);
        assert_eq!(pair.liquidity_usd(), 45000.0);
        assert_eq!(pair.pair_created_at, Some(1_700_000_000_000));
        assert_eq!(pair.market_cap, None);

        let info = pair.info.unwrap();
        assert_eq!(info.socials[0].kind, "twitter");
        assert!(info.websites.is_empty());
    }

    #[test]
    fn test_missing_liquidity_is_zero() {
        let pair = PairRecord::default();
        assert_eq!(pair.liquidity_usd(), 0.0);
    }

    #[test]
    fn test_price_usd_value() {
        let mut pair = PairRecord::default();
        pair.price_usd = "0.00021".to_string();
        assert_eq!(pair.price_usd_value(), 0.00021);

        pair.price_usd = "not-a-number".to_string();
        assert_eq!(pair.price_usd_value(), 0.0);

        pair.price_usd = String::new();
        assert_eq!(pair.price_usd_value(), 0.0);
    }
}
