use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::models::PhoenixCandidate;

/// Single-slot TTL cache over the most recent screen, so polling clients
/// inside the TTL window do not re-hit the upstream API.
pub struct ScreenCache {
    slot: RwLock<Option<(Instant, Arc<Vec<PhoenixCandidate>>)>>,
    ttl: Duration,
}

impl ScreenCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    pub fn get(&self) -> Option<Arc<Vec<PhoenixCandidate>>> {
        if self.ttl.is_zero() {
            return None;
        }
        let slot = self.slot.read();
        match slot.as_ref() {
            Some((stored_at, candidates)) if stored_at.elapsed() < self.ttl => {
                Some(candidates.clone())
            }
            _ => None,
        }
    }

    pub fn store(&self, candidates: Vec<PhoenixCandidate>) -> Arc<Vec<PhoenixCandidate>> {
        let candidates = Arc::new(candidates);
        if !self.ttl.is_zero() {
            *self.slot.write() = Some((Instant::now(), candidates.clone()));
        }
        candidates
    }
}
