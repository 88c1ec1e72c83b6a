use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use crate::models::{Alert, PhoenixCandidate, PhoenixSummary};
use crate::services::{scorer, ActivitySource, PhoenixScreener};
use crate::sources::PairSource;

/// Score above which a candidate produces an alert.
const ALERT_SCORE_FLOOR: f64 = 60.0;
const MAX_ALERTS: usize = 10;
const MAX_LARGE_BUYS: usize = 20;
const LARGE_BUY_FLOOR_USD: f64 = 3000.0;

pub struct AppState {
    pub screener: Arc<PhoenixScreener>,
    pub source: Arc<dyn PairSource>,
    pub activity: Arc<dyn ActivitySource>,
    pub chain: String,
    pub realtime_enabled: bool,
    pub realtime_interval_secs: u64,
}

type ApiError = (StatusCode, Json<Value>);

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
}

/// GET /
async fn index() -> Json<Value> {
    Json(json!({
        "message": "Phoenix Token Finder API",
        "status": "running",
        "endpoints": {
            "top_phoenixes": "/api/top-phoenixes",
            "top_phoenixes_summary": "/api/top-phoenixes/summary",
            "recent_alerts": "/api/alerts/recent",
            "token_analysis": "/api/token/{address}/analysis",
            "health": "/api/health"
        }
    }))
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "phoenix-finder" }))
}

/// GET /api/top-phoenixes - full candidate list, brs descending
async fn get_top_phoenixes(State(state): State<Arc<AppState>>) -> Json<Vec<PhoenixCandidate>> {
    Json(state.screener.screen().await.as_ref().clone())
}

/// GET /api/top-phoenixes/summary - light projection, one pair per term
async fn get_top_phoenixes_summary(State(state): State<Arc<AppState>>) -> Json<Vec<PhoenixSummary>> {
    Json(state.screener.screen_summary().await)
}

/// Candidates scoring high enough become alerts, newest screen only.
pub(crate) fn alerts_from(candidates: &[PhoenixCandidate]) -> Vec<Alert> {
    candidates.iter()
        .filter(|c| c.brs_score >= ALERT_SCORE_FLOOR)
        .take(MAX_ALERTS)
        .enumerate()
        .map(|(i, c)| Alert::from_candidate(i as u32 + 1, c))
        .collect()
}

/// GET /api/alerts/recent - derived from the current screen, no persistence
async fn get_recent_alerts(State(state): State<Arc<AppState>>) -> Json<Vec<Alert>> {
    let candidates = state.screener.screen().await;
    Json(alerts_from(&candidates))
}

/// GET /api/token/:address/analysis
async fn get_token_analysis(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let pairs = state.source.token_pairs(&address).await.map_err(internal_error)?;

    let pair = pairs.into_iter()
        .find(|p| p.chain == state.chain && p.has_identity())
        .ok_or((StatusCode::NOT_FOUND, Json(json!({ "error": "Token not found" }))))?;

    let candidate = scorer::build_candidate(&pair);

    let volume_history = state.activity.volume_history(candidate.volume_24h, 30);
    let large_buys: Vec<_> = state.activity
        .large_transactions(candidate.current_price, 30)
        .into_iter()
        .filter(|tx| tx.side == "buy" && tx.usd_amount >= LARGE_BUY_FLOOR_USD)
        .take(MAX_LARGE_BUYS)
        .collect();
    let buy_volume: f64 = large_buys.iter().map(|tx| tx.usd_amount).sum();

    let mcap_ratio = |value: f64| {
        if candidate.market_cap > 0.0 { value / candidate.market_cap * 100.0 } else { 0.0 }
    };

    Ok(Json(json!({
        "token_info": {
            "symbol": candidate.symbol,
            "name": candidate.name,
            "address": candidate.address,
            "chain": candidate.chain,
            "token_age_days": candidate.token_age_days,
            "first_seen": candidate.first_seen_date,
            "dexscreener_url": format!("https://dexscreener.com/{}/{}", candidate.chain, candidate.address),
        },
        "market_metrics": {
            "current_price": candidate.current_price,
            "market_cap": candidate.market_cap,
            "fdv": candidate.fdv,
            "liquidity_usd": candidate.liquidity_usd,
            "volume_24h": candidate.volume_24h,
            "liquidity_to_mcap_ratio": mcap_ratio(candidate.liquidity_usd),
            "volume_to_mcap_ratio": mcap_ratio(candidate.volume_24h),
        },
        "phoenix_indicators": {
            "crash_from_ath": candidate.crash_percentage,
            "price_change_24h": candidate.price_change_24h,
            "buy_sell_ratio": candidate.buy_sell_ratio,
        },
        "volume_history": volume_history,
        "large_transactions": {
            "total_count": large_buys.len(),
            "total_volume": buy_volume,
            "transactions": large_buys,
        },
        "brs_analysis": {
            "total_score": candidate.brs_score,
            "category": candidate.category,
            "interpretation": candidate.description,
            "score_breakdown": {
                "holder_resilience": score_entry(candidate.holder_resilience_score, 20.0),
                "volume_floor": score_entry(candidate.volume_floor_score, 20.0),
                "price_recovery": score_entry(candidate.price_recovery_score, 20.0),
                "distribution_health": score_entry(candidate.distribution_health_score, 10.0),
                "revival_momentum": score_entry(candidate.revival_momentum_score, 15.0),
                "smart_accumulation": score_entry(candidate.smart_accumulation_score, 15.0),
            }
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

fn score_entry(score: f64, max_score: f64) -> Value {
    json!({
        "score": score,
        "max_score": max_score,
        "percentage": score / max_score * 100.0,
    })
}

async fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/top-phoenixes", get(get_top_phoenixes))
        .route("/api/top-phoenixes/summary", get(get_top_phoenixes_summary))
        .route("/api/alerts/recent", get(get_recent_alerts))
        .route("/api/token/:address/analysis", get(get_token_analysis));

    if state.realtime_enabled {
        router = router.route("/ws", get(super::websocket::ws_handler));
    }

    router
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
