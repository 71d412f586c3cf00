use crate::advice::AdviceClient;
use crate::auth::SessionStore;
use market_data::MarketService;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    // Coarse single-writer lock: every mutating market operation takes the
    // write half, so ledger interleavings cannot occur.
    pub market: Arc<RwLock<MarketService>>,
    pub sessions: Arc<SessionStore>,
    pub advice: Arc<AdviceClient>,
}

impl AppState {
    pub fn new(advice: AdviceClient) -> Self {
        Self {
            market: Arc::new(RwLock::new(MarketService::new())),
            sessions: Arc::new(SessionStore::new()),
            advice: Arc::new(advice),
        }
    }
}
