use crate::models::{PairTicker, PhoenixCandidate};

/// BRS saturates here regardless of volume.
pub const MAX_BRS: f64 = 98.0;
const BASE_BRS: f64 = 80.0;
const BRS_PER_MILLION_VOLUME: f64 = 3.0;

pub const CATEGORY: &str = "Phoenix Rising";
pub const DESCRIPTION: &str = "Strong buy signal - high recovery potential";

// Placeholder component scores. These are NOT derived from market data;
// real holder/recovery signals would need an on-chain feed we do not have.
// The UI expects the fields, so they are served as flat constants.
pub const HOLDER_RESILIENCE_SCORE: f64 = 20.0;
pub const VOLUME_FLOOR_SCORE: f64 = 18.0;
pub const PRICE_RECOVERY_SCORE: f64 = 18.0;
pub const DISTRIBUTION_HEALTH_SCORE: f64 = 10.0;
pub const REVIVAL_MOMENTUM_SCORE: f64 = 15.0;
pub const SMART_ACCUMULATION_SCORE: f64 = 15.0;

// Placeholder: not derived from an actual all-time high.
pub const CRASH_PERCENTAGE: f64 = 75.0;

/// Bottom/Recovery Score: saturating function of 24h volume only.
pub fn brs_score(volume_24h: f64) -> f64 {
    MAX_BRS.min(BASE_BRS + volume_24h / 1_000_000.0 * BRS_PER_MILLION_VOLUME)
}

pub fn buy_sell_ratio(price_change_24h: f64) -> f64 {
    1.25 + price_change_24h / 100.0
}

fn trend(price_change_24h: f64) -> &'static str {
    if price_change_24h > 0.0 { "up" } else { "down" }
}

/// Map one fetched pair to a scored candidate.
pub fn build_candidate(pair: &PairTicker) -> PhoenixCandidate {
    PhoenixCandidate {
        address: pair.address.clone(),
        symbol: pair.symbol.clone(),
        name: pair.name.clone(),
        chain: pair.chain.clone(),
        current_price: pair.price_usd,
        crash_percentage: CRASH_PERCENTAGE,
        liquidity_usd: pair.liquidity_usd,
        volume_24h: pair.volume_24h,
        market_cap: pair.market_cap,
        fdv: pair.fdv,
        price_change_24h: pair.price_change_24h,
        brs_score: brs_score(pair.volume_24h),
        category: CATEGORY.to_string(),
        description: DESCRIPTION.to_string(),
        holder_resilience_score: HOLDER_RESILIENCE_SCORE,
        volume_floor_score: VOLUME_FLOOR_SCORE,
        price_recovery_score: PRICE_RECOVERY_SCORE,
        distribution_health_score: DISTRIBUTION_HEALTH_SCORE,
        revival_momentum_score: REVIVAL_MOMENTUM_SCORE,
        smart_accumulation_score: SMART_ACCUMULATION_SCORE,
        buy_sell_ratio: buy_sell_ratio(pair.price_change_24h),
        volume_trend: trend(pair.price_change_24h).to_string(),
        price_trend: trend(pair.price_change_24h).to_string(),
        last_updated: chrono::Utc::now().to_rfc3339(),
        first_seen_date: None,
        token_age_days: None,
    }
}
