//! Discovery helpers
//!
//! Pure ranking over raw fetched pairs: dedupe, 24h volume ordering, and the
//! pump ranking used by pump mode.

use std::collections::HashMap;

use super::pair::PairRecord;

/// Search terms used when no trending keywords are active
pub const FALLBACK_SEARCH_TERMS: [&str; 2] = ["solana", "meme"];

/// Broad searches used to build the pump feed
pub const PUMP_SEARCH_TERMS: [&str; 5] = ["solana", "pump", "moon", "pepe", "bonk"];

pub const TRENDING_LIMIT: usize = 100;
pub const PUMP_LIMIT: usize = 50;

/// Minimum 1h volume (USD) for a pump candidate
pub const PUMP_MIN_VOLUME_1H: f64 = 1_000.0;

/// Deduplicate by pair address. The last occurrence wins; order follows first sighting.
pub fn dedupe_by_pair_address(pairs: Vec<PairRecord>) -> Vec<PairRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<PairRecord> = Vec::with_capacity(pairs.len());

    for pair in pairs {
        match index.get(&pair.pair_address) {
            Some(&i) => out[i] = pair,
            None => {
                index.insert(pair.pair_address.clone(), out.len());
                out.push(pair);
            }
        }
    }
    out
}

/// Highest 24h volume first, truncated to `limit`
pub fn top_by_volume(mut pairs: Vec<PairRecord>, limit: usize) -> Vec<PairRecord> {
    pairs.sort_by(|a, b| b.volume.h24.total_cmp(&a.volume.h24));
    pairs.truncate(limit);
    pairs
}

/// 1h volume over liquidity; zero liquidity counts as $1
pub fn turnover_ratio(pair: &PairRecord) -> f64 {
    let liquidity = match pair.liquidity_usd() {
        l if l == 0.0 => 1.0,
        l => l,
    };
    pair.volume.h1 / liquidity
}

/// Solana pairs with real 1h activity, highest turnover first
pub fn rank_pump_candidates(pairs: Vec<PairRecord>, limit: usize) -> Vec<PairRecord> {
    let mut candidates: Vec<PairRecord> = pairs
        .into_iter()
        .filter(|p| p.is_solana())
        .filter(|p| p.volume.h1 > PUMP_MIN_VOLUME_1H)
        .collect();

    candidates.sort_by(|a, b| turnover_ratio(b).total_cmp(&turnover_ratio(a)));
    candidates.truncate(limit);
    candidates
}

/// Active keywords, or the fallback terms when there are none
pub fn search_terms(keywords: &[String]) -> Vec<String> {
    if keywords.is_empty() {
        FALLBACK_SEARCH_TERMS.iter().map(|s| s.to_string()).collect()
    } else {
        keywords.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pair::Liquidity;

    fn pair(address: &str, volume_24h: f64, volume_1h: f64, liquidity: Option<f64>) -> PairRecord {
        let mut p = PairRecord::default();
        p.chain_id = "solana".to_string();
        p.pair_address = address.to_string();
        p.volume.h24 = volume_24h;
        p.volume.h1 = volume_1h;
        p.liquidity = liquidity.map(|usd| Liquidity { usd, base: 0.0, quote: 0.0 });
        p
    }

    fn addresses(pairs: &[PairRecord]) -> Vec<&str> {
        pairs.iter().map(|p| p.pair_address.as_str()).collect()
    }

    #[test]
    fn test_dedupe_last_wins() {
        let pairs = vec![pair("A", 1.0, 0.0, None), pair("B", 2.0, 0.0, None), pair("A", 3.0, 0.0, None)];
        let out = dedupe_by_pair_address(pairs);
        assert_eq!(addresses(&out), vec!["A", "B"]);
        assert_eq!(out[0].volume.h24, 3.0);
    }

    #[test]
    fn test_top_by_volume() {
        let pairs = vec![pair("A", 1.0, 0.0, None), pair("B", 30.0, 0.0, None), pair("C", 20.0, 0.0, None)];
        assert_eq!(addresses(&top_by_volume(pairs, 2)), vec!["B", "C"]);
    }

    #[test]
    fn test_pump_ranking() {
        let mut other_chain = pair("ETH", 0.0, 1_000_000.0, Some(1.0));
        other_chain.chain_id = "ethereum".to_string();

        let pairs = vec![
            pair("SLOW", 0.0, 5_000.0, Some(100_000.0)),  // 0.05
            pair("FAST", 0.0, 50_000.0, Some(10_000.0)),  // 5
            pair("QUIET", 0.0, 900.0, Some(10.0)),        // below 1h floor
            pair("NOLIQ", 0.0, 2_000.0, None),            // 2000
            other_chain,
        ];

        let ranked = rank_pump_candidates(pairs, 10);
        assert_eq!(addresses(&ranked), vec!["NOLIQ", "FAST", "SLOW"]);
    }

    #[test]
    fn test_search_terms_fallback() {
        assert_eq!(search_terms(&[]), vec!["solana".to_string(), "meme".to_string()]);
        assert_eq!(search_terms(&["wif".to_string()]), vec!["wif".to_string()]);
    }
}
