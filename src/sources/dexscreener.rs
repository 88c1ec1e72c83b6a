use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use crate::models::PairTicker;
use super::{PairSource, SourceError};

const BASE_URL: &str = "https://api.dexscreener.com";

/// DexScreener pair search client.
pub struct DexScreenerSource {
    client: Client,
}

impl DexScreenerSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<PairTicker>, SourceError> {
        let resp = self.client.get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if resp.status() == 429 {
            return Err(SourceError::RateLimit);
        }

        if !resp.status().is_success() {
            return Ok(vec![]);
        }

        let data: DexScreenerResponse = resp.json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(data.pairs.unwrap_or_default()
            .into_iter()
            .map(PairTicker::from)
            .collect())
    }
}

#[async_trait]
impl PairSource for DexScreenerSource {
    fn name(&self) -> &'static str { "DexScreener" }

    async fn search_pairs(&self, term: &str) -> Result<Vec<PairTicker>, SourceError> {
        let url = format!("{}/latest/dex/search?q={}", BASE_URL, term);
        self.fetch(&url).await
    }

    async fn token_pairs(&self, address: &str) -> Result<Vec<PairTicker>, SourceError> {
        let url = format!("{}/latest/dex/tokens/{}", BASE_URL, address);
        self.fetch(&url).await
    }
}

#[derive(Debug, Deserialize)]
struct DexScreenerResponse {
    pairs: Option<Vec<DexScreenerPair>>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerPair {
    #[serde(rename = "chainId")]
    chain_id: Option<String>,
    #[serde(rename = "baseToken")]
    base_token: Option<DexScreenerToken>,
    #[serde(rename = "priceUsd")]
    price_usd: Option<String>,
    #[serde(rename = "priceChange")]
    price_change: Option<DexScreenerPriceChange>,
    volume: Option<DexScreenerVolume>,
    liquidity: Option<DexScreenerLiquidity>,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
    fdv: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerToken {
    address: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerPriceChange {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerVolume {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerLiquidity {
    usd: Option<f64>,
}

impl From<DexScreenerPair> for PairTicker {
    fn from(pair: DexScreenerPair) -> Self {
        let token = pair.base_token.unwrap_or(DexScreenerToken {
            address: None,
            symbol: None,
            name: None,
        });
        let symbol = token.symbol.unwrap_or_default();
        // DexScreener reports priceUsd as a string
        let price_usd = pair.price_usd
            .as_deref()
            .and_then(|p| p.parse::<f64>().ok())
            .unwrap_or(0.0);

        PairTicker {
            address: token.address.unwrap_or_default(),
            name: token.name.unwrap_or_else(|| symbol.clone()),
            symbol,
            chain: pair.chain_id.unwrap_or_else(|| "unknown".to_string()),
            price_usd,
            price_change_24h: pair.price_change.and_then(|c| c.h24).unwrap_or(0.0),
            volume_24h: pair.volume.and_then(|v| v.h24).unwrap_or(0.0),
            liquidity_usd: pair.liquidity.and_then(|l| l.usd).unwrap_or(0.0),
            market_cap: pair.market_cap.unwrap_or(0.0),
            fdv: pair.fdv.unwrap_or(0.0),
        }
    }
}
