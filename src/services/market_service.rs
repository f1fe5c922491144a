use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Candle;
use crate::utils::AppError;

const CHART_API_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Trailing window for price history requests.
pub const HISTORY_WINDOW_DAYS: i64 = 365;

/// Raw chart payload from the price-history provider.
#[derive(Debug, Deserialize)]
pub struct ChartPayload {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartSeriesData>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartSeriesData {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

/// Daily price history provider. The core only consumes candles; the
/// provider itself is an external collaborator.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Daily bars for `pair` over the trailing 365-day window.
    async fn history(&self, pair: &str) -> Result<ChartPayload, AppError>;
}

pub struct YahooChartClient {
    client: reqwest::Client,
}

impl YahooChartClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build chart HTTP client");
        Self { client }
    }
}

impl Default for YahooChartClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceFeed for YahooChartClient {
    async fn history(&self, pair: &str) -> Result<ChartPayload, AppError> {
        let end = Utc::now();
        let start = end - Duration::days(HISTORY_WINDOW_DAYS);
        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d",
            CHART_API_BASE,
            urlencoding::encode(pair),
            start.timestamp(),
            end.timestamp()
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("chart request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "chart provider returned {}",
                response.status()
            )));
        }

        response
            .json::<ChartPayload>()
            .await
            .map_err(|e| AppError::Provider(format!("failed to parse chart payload: {}", e)))
    }
}

/// `BTC` -> `BTC-USD`, the provider's pair convention.
pub fn usd_pair(symbol: &str) -> String {
    format!("{}-USD", symbol.trim().to_uppercase())
}

/// Fetches and decodes daily history for a symbol.
pub async fn get_price_history(
    feed: &dyn PriceFeed,
    symbol: &str,
) -> Result<Vec<Candle>, AppError> {
    let pair = usd_pair(symbol);
    log::info!("📈 Fetching {} days of history for {}", HISTORY_WINDOW_DAYS, pair);
    let payload = feed.history(&pair).await?;
    Ok(candles_from_payload(payload))
}

/// Zips provider arrays into candles. Rows with any missing component are
/// skipped rather than invented.
pub fn candles_from_payload(payload: ChartPayload) -> Vec<Candle> {
    let series = match payload.chart.result.and_then(|mut r| {
        if r.is_empty() {
            None
        } else {
            Some(r.remove(0))
        }
    }) {
        Some(series) => series,
        None => return Vec::new(),
    };

    let quote = match series.indicators.quote.into_iter().next() {
        Some(quote) => quote,
        None => return Vec::new(),
    };

    let mut candles = Vec::with_capacity(series.timestamp.len());
    for (i, ts) in series.timestamp.iter().enumerate() {
        let row = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
            quote.volume.get(i).copied().flatten(),
        );
        if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
            let date = match Utc.timestamp_opt(*ts, 0).single() {
                Some(dt) => dt.format("%Y-%m-%d").to_string(),
                None => continue,
            };
            candles.push(Candle {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }
    }
    candles
}

/// Serializable candlestick series for the charts endpoint: plain arrays,
/// never a figure object.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChartSeriesResponse {
    pub success: bool,
    pub symbol: String,
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

pub fn chart_series(symbol: &str, candles: &[Candle]) -> ChartSeriesResponse {
    ChartSeriesResponse {
        success: true,
        symbol: usd_pair(symbol),
        dates: candles.iter().map(|c| c.date.clone()).collect(),
        open: candles.iter().map(|c| c.open).collect(),
        high: candles.iter().map(|c| c.high).collect(),
        low: candles.iter().map(|c| c.low).collect(),
        close: candles.iter().map(|c| c.close).collect(),
        volume: candles.iter().map(|c| c.volume).collect(),
    }
}

/// Pair/volume/cap snapshot from the market-data provider.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub price_usd: f64,
    pub volume_24h_usd: f64,
    pub market_cap_usd: f64,
}

/// Market-snapshot capability. The provider integration has no defined
/// behavior yet; the trait fixes the typed surface until it does.
#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    async fn snapshot(&self, api_key: &str, symbol: &str) -> Result<MarketSnapshot, AppError>;
}

/// Placeholder implementation of the snapshot slot.
pub struct UnsupportedSnapshotClient;

#[async_trait]
impl SnapshotFeed for UnsupportedSnapshotClient {
    async fn snapshot(&self, _api_key: &str, symbol: &str) -> Result<MarketSnapshot, AppError> {
        log::warn!(
            "⚠️ Market snapshot requested for {} but the provider integration is not yet supported",
            symbol
        );
        Err(AppError::NotSupported("market snapshot provider"))
    }
}
