use serde::{Deserialize, Serialize};
use super::PhoenixCandidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub token_address: String,
    pub alert_type: String,
    pub message: String,
    pub score_at_alert: f64,
    pub timestamp: String,
}

impl Alert {
    pub fn from_candidate(id: u32, candidate: &PhoenixCandidate) -> Self {
        Self {
            id,
            token_address: candidate.address.clone(),
            alert_type: candidate.category.to_lowercase().replace(' ', "_"),
            message: format!(
                "🚀 {} - {}: {}. BRS Score: {}",
                candidate.symbol, candidate.category, candidate.description, candidate.brs_score
            ),
            score_at_alert: candidate.brs_score,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
