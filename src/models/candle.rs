use serde::{Deserialize, Serialize};

/// One daily price bar from the price-history provider.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Candle {
    /// Trading day, `YYYY-MM-DD`.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
