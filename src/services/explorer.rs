use async_trait::async_trait;
use log::debug;

use crate::errors::GalleryError;
use crate::models::TokenList;

/// Wallet whose tokens make up the gallery.
pub const WALLET_ADDRESS: &str = "3LhsVuVw5SAgJMu2v8ZCZPnSkYTLfaekbibyHto98GWD";

pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://api.solscan.io";

/// Build `<base>/account/tokens?address=<account>`.
pub fn tokens_url(base_url: &str, account: &str) -> String {
    format!(
        "{}/account/tokens?address={}",
        base_url.trim_end_matches('/'),
        account
    )
}

/// Source of an account's token list.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch_tokens(&self) -> Result<TokenList, GalleryError>;
}

/// Solscan-backed token source. One GET per call, no retries.
pub struct SolscanClient {
    client: reqwest::Client,
    url: String,
}

impl SolscanClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: tokens_url(base_url, WALLET_ADDRESS),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TokenSource for SolscanClient {
    async fn fetch_tokens(&self) -> Result<TokenList, GalleryError> {
        debug!("Fetching token list from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        debug!("Explorer responded with status {}", response.status());

        let body = response.bytes().await?;
        let tokens: TokenList = serde_json::from_slice(&body)?;

        debug!("Explorer returned {} token records", tokens.data.len());
        Ok(tokens)
    }
}
