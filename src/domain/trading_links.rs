//! Deep links into Solana trading bots for a token mint.

use serde::Serialize;

/// BullX chain id for Solana
const BULLX_SOLANA_CHAIN_ID: u64 = 1_399_811_149;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradingLink {
    pub name: &'static str,
    pub url: String,
}

/// Trojan, BonkBot, Photon and BullX links, in that order
pub fn trading_links(address: &str) -> Vec<TradingLink> {
    vec![
        TradingLink {
            name: "Trojan",
            url: format!("https://t.me/solana_trojanbot?start=r-antigravity-{}", address),
        },
        TradingLink {
            name: "BonkBot",
            url: format!("https://t.me/bonkbot_bot?start=ref_antigravity_ca_{}", address),
        },
        TradingLink {
            name: "Photon",
            url: format!("https://photon-sol.tinyastro.io/en/lp/{}", address),
        },
        TradingLink {
            name: "BullX",
            url: format!(
                "https://bullx.io/terminal?chainId={}&address={}",
                BULLX_SOLANA_CHAIN_ID, address
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_embed_address() {
        let links = trading_links("Mint111");

        let names: Vec<&str> = links.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Trojan", "BonkBot", "Photon", "BullX"]);
        assert!(links.iter().all(|l| l.url.contains("Mint111")));
        assert_eq!(links[2].url, "https://photon-sol.tinyastro.io/en/lp/Mint111");
        assert_eq!(
            links[3].url,
            "https://bullx.io/terminal?chainId=1399811149&address=Mint111"
        );
    }
}
