//! Meme Screener - Solana meme coin screener
//!
//! Tiering, scam scoring and exit alerts for DexScreener pairs.

use anyhow::Result;

use meme_screener::adapters::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (env overrides go here, not in screener.toml)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app).await
}
