use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::services::market_service::{self, PriceFeed, SnapshotFeed};
use crate::services::tips_service;
use crate::storage::ApiKeyStore;
use crate::utils::AppError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SymbolQuery {
    pub crypto_symbol: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct TimeQuery {
    pub language: Option<String>,
}

#[utoipa::path(
    get,
    path = "/charts",
    tag = "Market",
    params(SymbolQuery),
    responses(
        (status = 200, description = "Serializable candlestick series", body = market_service::ChartSeriesResponse),
        (status = 502, description = "Price-history provider failure")
    )
)]
pub async fn charts(
    query: web::Query<SymbolQuery>,
    price_feed: web::Data<dyn PriceFeed>,
) -> HttpResponse {
    let symbol = &query.crypto_symbol;
    log::info!("📈 GET /charts - symbol: {}", symbol);

    match market_service::get_price_history(price_feed.get_ref(), symbol).await {
        Ok(candles) => {
            log::info!("✅ {} candles for {}", candles.len(), symbol);
            HttpResponse::Ok().json(market_service::chart_series(symbol, &candles))
        }
        Err(e) => {
            log::error!("❌ Chart data failure for {}: {}", symbol, e);
            HttpResponse::BadGateway().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/market_data",
    tag = "Market",
    params(SymbolQuery),
    responses(
        (status = 200, description = "{\"success\": false} when no market-data key is configured"),
        (status = 501, description = "Snapshot provider integration not yet supported")
    )
)]
pub async fn market_data(
    query: web::Query<SymbolQuery>,
    keys: web::Data<ApiKeyStore>,
    snapshots: web::Data<dyn SnapshotFeed>,
) -> HttpResponse {
    let symbol = &query.crypto_symbol;
    log::info!("💹 GET /market_data - symbol: {}", symbol);

    let config = match keys.load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Key store failure: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    if config.market_data_api_key.is_empty() {
        return HttpResponse::Ok().json(serde_json::json!({ "success": false }));
    }

    match snapshots
        .snapshot(&config.market_data_api_key, symbol)
        .await
    {
        Ok(snapshot) => HttpResponse::Ok().json(serde_json::json!({ "market_data": snapshot })),
        Err(AppError::NotSupported(what)) => {
            HttpResponse::NotImplemented().json(serde_json::json!({
                "success": false,
                "error": format!("{} is not yet supported", what)
            }))
        }
        Err(e) => {
            log::error!("❌ Snapshot failure for {}: {}", symbol, e);
            HttpResponse::BadGateway().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/time",
    tag = "Market",
    params(TimeQuery),
    responses(
        (status = 200, description = "Placeholder endpoint; the tips helper is not yet supported")
    )
)]
pub async fn time_info(query: web::Query<TimeQuery>) -> HttpResponse {
    let language = query.language.as_deref().unwrap_or("en");
    log::info!("🕐 GET /time - language: {}", language);

    // The tips helper is a capability slot; the legacy body shape stays.
    if let Err(e) = tips_service::learning_tips(language) {
        log::debug!("Tips helper unavailable: {}", e);
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
