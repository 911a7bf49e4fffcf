//! Trending Keywords
//!
//! Keyword matching against token name/symbol, and the keyword set that feeds
//! it. Keywords come from the user or from an external trending feed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::pair::PairRecord;

/// Length of generated keyword ids
const KEYWORD_ID_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSource {
    Twitter,
    Tiktok,
    Custom,
    Coingecko,
}

impl fmt::Display for KeywordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeywordSource::Twitter => "twitter",
            KeywordSource::Tiktok => "tiktok",
            KeywordSource::Custom => "custom",
            KeywordSource::Coingecko => "coingecko",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for KeywordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(KeywordSource::Twitter),
            "tiktok" => Ok(KeywordSource::Tiktok),
            "custom" => Ok(KeywordSource::Custom),
            "coingecko" => Ok(KeywordSource::Coingecko),
            other => Err(format!("unknown keyword source '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingKeyword {
    pub id: String,
    /// Normalized (trimmed, lowercase) keyword
    pub keyword: String,
    pub source: KeywordSource,
    /// Unix millis
    pub added_at: i64,
    pub is_active: bool,
}

/// Result of matching one pair against a keyword list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendMatch {
    pub matches: bool,
    pub matched_keywords: Vec<String>,
}

/// Case-insensitive substring match of each keyword against base token name and symbol.
/// Matched keywords keep input order.
pub fn matches_trending_keywords(pair: &PairRecord, keywords: &[String]) -> TrendMatch {
    if keywords.is_empty() {
        return TrendMatch::default();
    }

    let name = pair.base_token.name.to_lowercase();
    let symbol = pair.base_token.symbol.to_lowercase();

    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| {
            let keyword = k.to_lowercase();
            name.contains(&keyword) || symbol.contains(&keyword)
        })
        .cloned()
        .collect();

    TrendMatch {
        matches: !matched_keywords.is_empty(),
        matched_keywords,
    }
}

/// Random base-36 id
pub fn generate_keyword_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..KEYWORD_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Managed collection of trending keywords
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSet {
    keywords: Vec<TrendingKeyword>,
    #[serde(default)]
    is_initialized: bool,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keywords(&self) -> &[TrendingKeyword] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn mark_initialized(&mut self) {
        self.is_initialized = true;
    }

    /// Whether the set needs seeding from the trending feed
    pub fn needs_seed(&self) -> bool {
        !self.is_initialized || self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        self.keywords.iter().any(|k| k.keyword.to_lowercase() == needle)
    }

    /// Add a keyword. Returns the new id, or `None` for duplicates and blanks.
    pub fn add(&mut self, keyword: &str, source: KeywordSource, now_ms: i64) -> Option<String> {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() || self.contains(&normalized) {
            return None;
        }

        let id = generate_keyword_id();
        self.keywords.push(TrendingKeyword {
            id: id.clone(),
            keyword: normalized,
            source,
            added_at: now_ms,
            is_active: true,
        });
        Some(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k.id != id);
        self.keywords.len() != before
    }

    /// Flip the active flag. Returns the new state if the id exists.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        self.keywords.iter_mut().find(|k| k.id == id).map(|k| {
            k.is_active = !k.is_active;
            k.is_active
        })
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
    }

    /// Active keyword strings, in insertion order
    pub fn active_keywords(&self) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|k| k.is_active)
            .map(|k| k.keyword.clone())
            .collect()
    }

    /// Merge words from the trending feed, skipping ones already present.
    /// Returns how many were added.
    pub fn merge_feed(&mut self, words: &[String], now_ms: i64) -> usize {
        let mut added = 0;
        for word in words {
            if self.add(word, KeywordSource::Coingecko, now_ms).is_some() {
                added += 1;
            }
        }
        self.is_initialized = true;
        added
    }
}

/// Extract feed keywords from trending coins: every symbol, plus single-word names under 10 chars.
/// Lowercased and deduplicated, symbols first.
pub fn feed_keywords<'a, I>(coins: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let coins: Vec<(&str, &str)> = coins.into_iter().collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    let symbols = coins.iter().map(|(_, symbol)| symbol.to_lowercase());
    let names = coins
        .iter()
        .map(|(name, _)| name.to_lowercase())
        .filter(|name| name.split(' ').count() == 1 && name.chars().count() < 10);

    for word in symbols.chain(names) {
        if !word.is_empty() && seen.insert(word.clone()) {
            out.push(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, symbol: &str) -> PairRecord {
        let mut p = PairRecord::default();
        p.base_token.name = name.to_string();
        p.base_token.symbol = symbol.to_string();
        p
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let result = matches_trending_keywords(&pair("pepecoin", "PEPE"), &[]);
        assert_eq!(result, TrendMatch { matches: false, matched_keywords: vec![] });
    }

    #[test]
    fn test_case_insensitive() {
        let result = matches_trending_keywords(&pair("pepecoin", "PC"), &kw(&["PEPE"]));
        assert!(result.matches);
        assert_eq!(result.matched_keywords, kw(&["PEPE"]));
    }

    #[test]
    fn test_symbol_match_and_order_preserved() {
        let result = matches_trending_keywords(
            &pair("Dog Wif Hat", "WIF"),
            &kw(&["hat", "cat", "wif", "dog"]),
        );
        assert_eq!(result.matched_keywords, kw(&["hat", "wif", "dog"]));
    }

    #[test]
    fn test_duplicates_kept() {
        let result = matches_trending_keywords(&pair("bonk", "BONK"), &kw(&["bonk", "bonk"]));
        assert_eq!(result.matched_keywords.len(), 2);
    }

    #[test]
    fn test_no_match() {
        let result = matches_trending_keywords(&pair("Solana Cat", "SCAT"), &kw(&["dog"]));
        assert!(!result.matches);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_add_normalizes_and_dedupes() {
        let mut set = KeywordSet::new();
        assert!(set.add("  PePe ", KeywordSource::Custom, 1).is_some());
        assert!(set.add("pepe", KeywordSource::Twitter, 2).is_none());
        assert!(set.add("   ", KeywordSource::Custom, 3).is_none());

        assert_eq!(set.len(), 1);
        assert_eq!(set.keywords()[0].keyword, "pepe");
        assert_eq!(set.keywords()[0].id.len(), 7);
    }

    #[test]
    fn test_toggle_and_active() {
        let mut set = KeywordSet::new();
        let a = set.add("pepe", KeywordSource::Custom, 1).unwrap();
        set.add("bonk", KeywordSource::Custom, 1).unwrap();

        assert_eq!(set.toggle(&a), Some(false));
        assert_eq!(set.active_keywords(), kw(&["bonk"]));
        assert_eq!(set.toggle(&a), Some(true));
        assert_eq!(set.active_keywords(), kw(&["pepe", "bonk"]));
        assert_eq!(set.toggle("missing"), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut set = KeywordSet::new();
        let a = set.add("pepe", KeywordSource::Custom, 1).unwrap();
        set.add("bonk", KeywordSource::Custom, 1).unwrap();

        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_merge_feed() {
        let mut set = KeywordSet::new();
        set.add("pepe", KeywordSource::Custom, 1);
        assert!(set.needs_seed());

        let added = set.merge_feed(&kw(&["PEPE", "wif", "bonk"]), 5);
        assert_eq!(added, 2);
        assert!(set.is_initialized());
        assert!(!set.needs_seed());
        assert!(set
            .keywords()
            .iter()
            .filter(|k| k.keyword != "pepe")
            .all(|k| k.source == KeywordSource::Coingecko && k.added_at == 5));
    }

    #[test]
    fn test_feed_keywords() {
        let coins = vec![
            ("Pepe", "PEPE"),
            ("Dog Wif Hat", "WIF"),
            ("Extraordinarycoin", "EXC"),
            ("Bonk", "BONK"),
        ];
        let words = feed_keywords(coins);
        assert_eq!(words, kw(&["pepe", "wif", "exc", "bonk"]));
    }

    #[test]
    fn test_keyword_set_serde() {
        let mut set = KeywordSet::new();
        set.add("pepe", KeywordSource::Tiktok, 10);
        set.mark_initialized();

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"source\":\"tiktok\""));

        let back: KeywordSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
