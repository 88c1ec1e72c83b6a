use chrono::{Duration, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VolumePoint {
    pub date: String,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenTransaction {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub side: String,
    pub usd_amount: f64,
    pub token_amount: f64,
    pub price: f64,
    pub wallet: String,
}

/// Seam for the analysis view's history + transaction feed. The only
/// implementation is synthetic; a real on-chain indexer would slot in here.
pub trait ActivitySource: Send + Sync {
    fn volume_history(&self, current_volume: f64, days: u32) -> Vec<VolumePoint>;
    fn large_transactions(&self, price: f64, days: u32) -> Vec<TokenTransaction>;
}

/// Demo stand-in: generates plausible-looking random data. Nothing here
/// comes from a blockchain read.
pub struct SimulatedActivity;

impl ActivitySource for SimulatedActivity {
    fn volume_history(&self, current_volume: f64, days: u32) -> Vec<VolumePoint> {
        let mut rng = rand::thread_rng();
        let base_volume = current_volume * 0.7;
        let mut history = Vec::with_capacity(days as usize);

        for i in (1..=days).rev() {
            let date = Utc::now() - Duration::days(i as i64);
            let daily_variance: f64 = rng.gen_range(0.5..1.8);
            // Gradual upswing toward today
            let trend_factor = 1.0 + (days - i) as f64 / days as f64 * 0.3;
            history.push(VolumePoint {
                date: date.format("%Y-%m-%d").to_string(),
                volume: (base_volume * daily_variance * trend_factor * 100.0).round() / 100.0,
            });
        }

        history
    }

    fn large_transactions(&self, price: f64, days: u32) -> Vec<TokenTransaction> {
        if price <= 0.0 {
            return vec![];
        }

        let mut rng = rand::thread_rng();
        let count = rng.gen_range(15..=40);
        let mut transactions = Vec::with_capacity(count);

        for _ in 0..count {
            let minutes_ago = rng.gen_range(0.0..days as f64 * 24.0 * 60.0);
            let timestamp = Utc::now() - Duration::minutes(minutes_ago as i64);
            let usd_amount: f64 = rng.gen_range(2_000.0..100_000.0);
            // Skewed toward buys to show accumulation
            let is_buy = rng.gen_bool(0.75);
            let fill_price = price * rng.gen_range(0.95..1.05);

            transactions.push(TokenTransaction {
                timestamp: timestamp.to_rfc3339(),
                side: if is_buy { "buy" } else { "sell" }.to_string(),
                usd_amount: (usd_amount * 100.0).round() / 100.0,
                token_amount: (usd_amount / price * 100.0).round() / 100.0,
                price: (fill_price * 1e8).round() / 1e8,
                wallet: random_wallet(&mut rng),
            });
        }

        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }
}

fn random_wallet(rng: &mut impl Rng) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut tag = |n: usize| -> String {
        (0..n).map(|_| HEX[rng.gen_range(0..HEX.len())] as char).collect()
    };
    let head = tag(8);
    let tail = tag(8);
    format!("0x{}...{}", head, tail)
}
