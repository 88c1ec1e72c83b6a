use serde::{Deserialize, Serialize};

/// One pair as reported by the upstream search API, normalized to plain
/// numbers. Absent fields are already defaulted to 0 by the source client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairTicker {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub chain: String,
    pub price_usd: f64,
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub liquidity_usd: f64,
    pub market_cap: f64,
    pub fdv: f64,
}

impl PairTicker {
    /// A pair without a base-token address or symbol cannot become a
    /// candidate and is dropped during screening.
    pub fn has_identity(&self) -> bool {
        !self.address.is_empty() && !self.symbol.is_empty()
    }
}
