use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub screener: ScreenerConfig,
    #[serde(default)]
    pub realtime: RealtimeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScreenerConfig {
    /// Single chain the screen is restricted to.
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Fixed symbol queries sent to the pair-search API.
    #[serde(default = "default_watch_terms")]
    pub watch_terms: Vec<String>,
    #[serde(default = "default_min_liquidity")]
    pub min_liquidity_usd: f64,
    /// Max pairs kept per watch term in the full listing.
    #[serde(default = "default_per_term_cap")]
    pub per_term_cap: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// 0 disables the screen cache.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RealtimeConfig {
    /// When false clients poll the REST routes and /ws is not mounted.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_update_interval")]
    pub update_interval_secs: u64,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_chain() -> String { "solana".to_string() }
fn default_min_liquidity() -> f64 { 5000.0 }
fn default_per_term_cap() -> usize { 2 }
fn default_max_results() -> usize { 20 }
fn default_cache_ttl() -> u64 { 30 }
fn default_update_interval() -> u64 { 60 }

fn default_watch_terms() -> Vec<String> {
    ["BOME", "SLERF", "POPCAT", "MEW", "BONK", "GIGA", "MASK", "MYRO"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            chain: default_chain(),
            watch_terms: default_watch_terms(),
            min_liquidity_usd: default_min_liquidity(),
            per_term_cap: default_per_term_cap(),
            max_results: default_max_results(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self { enabled: false, update_interval_secs: default_update_interval() }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match fs::read_to_string("config.toml") {
            Ok(content) => Ok(toml::from_str(&content)?),
            // Missing file is fine, everything has a default
            Err(_) => Ok(toml::from_str("")?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_values() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.screener.chain, "solana");
        assert_eq!(config.screener.watch_terms.len(), 8);
        assert_eq!(config.screener.min_liquidity_usd, 5000.0);
        assert_eq!(config.screener.per_term_cap, 2);
        assert_eq!(config.screener.max_results, 20);
        assert!(!config.realtime.enabled);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [screener]
            watch_terms = ["BONK"]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.screener.watch_terms, vec!["BONK"]);
        assert_eq!(config.screener.max_results, 20);
    }
}
