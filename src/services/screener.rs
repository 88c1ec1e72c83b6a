use std::cmp::Ordering;
use std::sync::Arc;
use crate::config::ScreenerConfig;
use crate::models::{PhoenixCandidate, PhoenixSummary};
use crate::sources::PairSource;
use super::cache::ScreenCache;
use super::scorer;

/// Fetch + score + filter + rank pipeline. One instance serves every
/// request; it holds no per-request state beyond the TTL cache.
pub struct PhoenixScreener {
    source: Arc<dyn PairSource>,
    config: ScreenerConfig,
    cache: ScreenCache,
}

impl PhoenixScreener {
    pub fn new(source: Arc<dyn PairSource>, config: ScreenerConfig) -> Self {
        let cache = ScreenCache::new(config.cache_ttl_secs);
        Self { source, config, cache }
    }

    /// Full candidate list: cached within the TTL window.
    pub async fn screen(&self) -> Arc<Vec<PhoenixCandidate>> {
        if let Some(cached) = self.cache.get() {
            return cached;
        }
        let candidates = self.run(self.config.per_term_cap).await;
        self.cache.store(candidates)
    }

    /// Lightweight projection: one pair per watch term, never cached.
    pub async fn screen_summary(&self) -> Vec<PhoenixSummary> {
        self.run(1).await.iter().map(PhoenixSummary::from).collect()
    }

    async fn run(&self, per_term_cap: usize) -> Vec<PhoenixCandidate> {
        let mut candidates = Vec::new();

        for term in &self.config.watch_terms {
            // A failed term never aborts the batch
            let pairs = match self.source.search_pairs(term).await {
                Ok(pairs) => pairs,
                Err(e) => {
                    tracing::warn!("{} error for term {}: {}", self.source.name(), term, e);
                    continue;
                }
            };

            let kept = pairs.iter()
                .filter(|p| p.chain == self.config.chain && p.has_identity())
                .take(per_term_cap)
                .map(scorer::build_candidate)
                .filter(|c| c.liquidity_usd >= self.config.min_liquidity_usd)
                .collect::<Vec<_>>();

            tracing::debug!("term {}: {} pairs, {} kept", term, pairs.len(), kept.len());
            candidates.extend(kept);
        }

        // Stable sort keeps input order on score ties
        candidates.sort_by(|a, b| {
            b.brs_score.partial_cmp(&a.brs_score).unwrap_or(Ordering::Equal)
        });
        candidates.truncate(self.config.max_results);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use crate::models::PairTicker;
    use crate::sources::SourceError;

    struct MockSource {
        pairs: HashMap<String, Vec<PairTicker>>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl PairSource for MockSource {
        fn name(&self) -> &'static str { "mock" }

        async fn search_pairs(&self, term: &str) -> Result<Vec<PairTicker>, SourceError> {
            if self.failing.iter().any(|t| t == term) {
                return Err(SourceError::Network("connection timed out".to_string()));
            }
            Ok(self.pairs.get(term).cloned().unwrap_or_default())
        }

        async fn token_pairs(&self, address: &str) -> Result<Vec<PairTicker>, SourceError> {
            Ok(self.pairs.values()
                .flatten()
                .filter(|p| p.address == address)
                .cloned()
                .collect())
        }
    }

    fn pair(symbol: &str, chain: &str, volume_24h: f64, liquidity_usd: f64) -> PairTicker {
        PairTicker {
            address: format!("{}-addr", symbol),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            chain: chain.to_string(),
            price_usd: 1.0,
            price_change_24h: 2.0,
            volume_24h,
            liquidity_usd,
            market_cap: 1_000_000.0,
            fdv: 1_000_000.0,
        }
    }

    fn config(watch_terms: &[&str]) -> ScreenerConfig {
        ScreenerConfig {
            watch_terms: watch_terms.iter().map(|s| s.to_string()).collect(),
            cache_ttl_secs: 0,
            ..ScreenerConfig::default()
        }
    }

    fn screener(pairs: HashMap<String, Vec<PairTicker>>, failing: &[&str], cfg: ScreenerConfig) -> PhoenixScreener {
        PhoenixScreener::new(
            Arc::new(MockSource {
                pairs,
                failing: failing.iter().map(|s| s.to_string()).collect(),
            }),
            cfg,
        )
    }

    #[tokio::test]
    async fn filters_other_chains_and_missing_identity() {
        let mut pairs = HashMap::new();
        let mut anon = pair("GHOST", "solana", 1e6, 50_000.0);
        anon.address = String::new();
        pairs.insert("BONK".to_string(), vec![
            pair("BONK", "ethereum", 1e6, 50_000.0),
            anon,
            pair("BONK", "solana", 1e6, 50_000.0),
        ]);

        let result = screener(pairs, &[], config(&["BONK"])).screen().await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].chain, "solana");
        assert_eq!(result[0].symbol, "BONK");
    }

    #[tokio::test]
    async fn enforces_liquidity_floor() {
        let mut pairs = HashMap::new();
        pairs.insert("MEW".to_string(), vec![
            pair("MEW", "solana", 1e6, 4_999.0),
            pair("MEW2", "solana", 1e6, 5_000.0),
        ]);

        let result = screener(pairs, &[], config(&["MEW"])).screen().await;
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|c| c.liquidity_usd >= 5000.0));
    }

    #[tokio::test]
    async fn caps_pairs_per_term() {
        let mut pairs = HashMap::new();
        pairs.insert("WIF".to_string(), vec![
            pair("WIF1", "solana", 1e6, 50_000.0),
            pair("WIF2", "solana", 2e6, 50_000.0),
            pair("WIF3", "solana", 3e6, 50_000.0),
        ]);

        let result = screener(pairs, &[], config(&["WIF"])).screen().await;
        // per_term_cap of 2 applies before scoring, so the first two win
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.symbol.starts_with("WIF")));
        assert!(result.iter().any(|c| c.symbol == "WIF1"));
        assert!(result.iter().any(|c| c.symbol == "WIF2"));
    }

    #[tokio::test]
    async fn sorts_by_score_descending_and_truncates() {
        let terms: Vec<String> = (0..12).map(|i| format!("T{}", i)).collect();
        let mut pairs = HashMap::new();
        for (i, term) in terms.iter().enumerate() {
            pairs.insert(term.clone(), vec![
                pair(&format!("{}A", term), "solana", i as f64 * 100_000.0, 50_000.0),
                pair(&format!("{}B", term), "solana", i as f64 * 50_000.0, 50_000.0),
            ]);
        }

        let term_refs: Vec<&str> = terms.iter().map(|s| s.as_str()).collect();
        let result = screener(pairs, &[], config(&term_refs)).screen().await;

        assert_eq!(result.len(), 20);
        for window in result.windows(2) {
            assert!(window[0].brs_score >= window[1].brs_score);
        }
    }

    #[tokio::test]
    async fn equal_scores_keep_input_order() {
        let mut pairs = HashMap::new();
        pairs.insert("X".to_string(), vec![pair("FIRST", "solana", 1e6, 50_000.0)]);
        pairs.insert("Y".to_string(), vec![pair("SECOND", "solana", 1e6, 50_000.0)]);

        let result = screener(pairs, &[], config(&["X", "Y"])).screen().await;
        assert_eq!(result[0].symbol, "FIRST");
        assert_eq!(result[1].symbol, "SECOND");
    }

    #[tokio::test]
    async fn one_failing_term_does_not_abort_batch() {
        let terms = ["T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8"];
        let mut pairs = HashMap::new();
        for term in terms {
            pairs.insert(term.to_string(), vec![pair(term, "solana", 1e6, 50_000.0)]);
        }

        let result = screener(pairs, &["T3"], config(&terms)).screen().await;
        assert_eq!(result.len(), 7);
        assert!(!result.iter().any(|c| c.symbol == "T3"));
    }

    #[tokio::test]
    async fn no_matches_yields_empty_list() {
        let result = screener(HashMap::new(), &[], config(&["BOME", "SLERF"])).screen().await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn all_terms_failing_yields_empty_list() {
        let terms = ["A", "B"];
        let result = screener(HashMap::new(), &terms, config(&terms)).screen().await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn summary_takes_one_pair_per_term() {
        let mut pairs = HashMap::new();
        pairs.insert("BOME".to_string(), vec![
            pair("BOME", "solana", 2e6, 50_000.0),
            pair("BOME-alt", "solana", 9e6, 50_000.0),
        ]);

        let cfg = config(&["BOME"]);
        let summary = screener(pairs, &[], cfg).screen_summary().await;
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].symbol, "BOME");
        assert_eq!(summary[0].brs_score, 86.0);
    }

    #[tokio::test]
    async fn cached_screen_is_reused() {
        let mut pairs = HashMap::new();
        pairs.insert("BONK".to_string(), vec![pair("BONK", "solana", 1e6, 50_000.0)]);

        let mut cfg = config(&["BONK"]);
        cfg.cache_ttl_secs = 60;
        let screener = screener(pairs, &[], cfg);

        let first = screener.screen().await;
        let second = screener.screen().await;
        assert!(Arc::ptr_eq(&first, &second));
    }
}
