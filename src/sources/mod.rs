pub mod dexscreener;

use async_trait::async_trait;
use crate::models::PairTicker;

#[async_trait]
pub trait PairSource: Send + Sync {
    fn name(&self) -> &'static str;
    /// Free-text symbol search against the upstream pair API.
    async fn search_pairs(&self, term: &str) -> Result<Vec<PairTicker>, SourceError>;
    /// Pair lookup by base-token address, for the analysis view.
    async fn token_pairs(&self, address: &str) -> Result<Vec<PairTicker>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    Network(String),
    Parse(String),
    RateLimit,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Network(e) => write!(f, "Network error: {}", e),
            SourceError::Parse(e) => write!(f, "Parse error: {}", e),
            SourceError::RateLimit => write!(f, "Rate limited"),
        }
    }
}

impl std::error::Error for SourceError {}
