use serde::{Deserialize, Serialize};

/// Full candidate record served by /api/top-phoenixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoenixCandidate {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub chain: String,
    pub current_price: f64,
    pub crash_percentage: f64,
    pub liquidity_usd: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub fdv: f64,
    pub price_change_24h: f64,
    pub brs_score: f64,
    pub category: String,
    pub description: String,
    pub holder_resilience_score: f64,
    pub volume_floor_score: f64,
    pub price_recovery_score: f64,
    pub distribution_health_score: f64,
    pub revival_momentum_score: f64,
    pub smart_accumulation_score: f64,
    pub buy_sell_ratio: f64,
    pub volume_trend: String,
    pub price_trend: String,
    pub last_updated: String,
    /// Unknown without a historical feed; never fabricated.
    pub first_seen_date: Option<String>,
    pub token_age_days: Option<u32>,
}

/// Lightweight projection served by /api/top-phoenixes/summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoenixSummary {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub brs_score: f64,
    pub chain: String,
}

impl From<&PhoenixCandidate> for PhoenixSummary {
    fn from(candidate: &PhoenixCandidate) -> Self {
        Self {
            symbol: candidate.symbol.clone(),
            name: candidate.name.clone(),
            current_price: candidate.current_price,
            price_change_24h: candidate.price_change_24h,
            volume_24h: candidate.volume_24h,
            market_cap: candidate.market_cap,
            brs_score: candidate.brs_score,
            chain: candidate.chain.clone(),
        }
    }
}
