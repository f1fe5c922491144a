use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::services::market_service::{self, PriceFeed};
use crate::services::news_service::{self, NewsFeed, DEFAULT_ARTICLE_COUNT};
use crate::services::sentiment_service;
use crate::services::signal_service;
use crate::storage::ApiKeyStore;
use crate::utils::AppError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NewsQuery {
    pub crypto_symbol: String,
}

#[utoipa::path(
    get,
    path = "/crypto_news/{symbol}",
    tag = "News",
    params(("symbol" = String, Path, description = "Cryptocurrency symbol, e.g. BTC")),
    responses(
        (status = 200, description = "Raw news list for the symbol; empty on provider failure", body = [crate::models::NewsArticle])
    )
)]
pub async fn crypto_news(
    path: web::Path<String>,
    keys: web::Data<ApiKeyStore>,
    feed: web::Data<dyn NewsFeed>,
) -> HttpResponse {
    let symbol = path.into_inner();
    log::info!("📰 GET /crypto_news/{}", symbol);

    let config = match keys.load() {
        Ok(config) => config,
        Err(e) => return storage_failure(e),
    };

    let articles = news_service::get_crypto_news(
        feed.get_ref(),
        &config.news_api_key,
        &symbol,
        DEFAULT_ARTICLE_COUNT,
    )
    .await;

    HttpResponse::Ok().json(articles)
}

#[utoipa::path(
    get,
    path = "/news",
    tag = "News",
    params(NewsQuery),
    responses(
        (status = 200, description = "News with sentiment scores plus buy/sell signals, or {\"success\": false} when no news key is configured"),
        (status = 502, description = "Price-history provider failure")
    )
)]
pub async fn news_bundle(
    query: web::Query<NewsQuery>,
    keys: web::Data<ApiKeyStore>,
    news_feed: web::Data<dyn NewsFeed>,
    price_feed: web::Data<dyn PriceFeed>,
) -> HttpResponse {
    let symbol = &query.crypto_symbol;
    log::info!("📰 GET /news - symbol: {}", symbol);

    let config = match keys.load() {
        Ok(config) => config,
        Err(e) => return storage_failure(e),
    };

    if config.news_api_key.is_empty() {
        log::warn!("⚠️ /news requested without a configured news key");
        return HttpResponse::Ok().json(serde_json::json!({ "success": false }));
    }

    let candles = match market_service::get_price_history(price_feed.get_ref(), symbol).await {
        Ok(candles) => candles,
        Err(e) => return provider_failure(e),
    };

    let articles = news_service::get_crypto_news(
        news_feed.get_ref(),
        &config.news_api_key,
        symbol,
        DEFAULT_ARTICLE_COUNT,
    )
    .await;

    let scored =
        sentiment_service::score_sentiment(&articles, &sentiment_service::default_weighted_terms());
    let (buy_signal, sell_signal) = signal_service::generate_signals(&candles, &scored);

    HttpResponse::Ok().json(serde_json::json!({
        "news": scored,
        "buy_signal": buy_signal,
        "sell_signal": sell_signal
    }))
}

#[utoipa::path(
    get,
    path = "/signal",
    tag = "News",
    params(NewsQuery),
    responses(
        (status = 200, description = "Buy/sell signals only, or {\"success\": false} when no news key is configured"),
        (status = 502, description = "Price-history provider failure")
    )
)]
pub async fn signal(
    query: web::Query<NewsQuery>,
    keys: web::Data<ApiKeyStore>,
    news_feed: web::Data<dyn NewsFeed>,
    price_feed: web::Data<dyn PriceFeed>,
) -> HttpResponse {
    let symbol = &query.crypto_symbol;
    log::info!("📊 GET /signal - symbol: {}", symbol);

    let config = match keys.load() {
        Ok(config) => config,
        Err(e) => return storage_failure(e),
    };

    if config.news_api_key.is_empty() {
        log::warn!("⚠️ /signal requested without a configured news key");
        return HttpResponse::Ok().json(serde_json::json!({ "success": false }));
    }

    let candles = match market_service::get_price_history(price_feed.get_ref(), symbol).await {
        Ok(candles) => candles,
        Err(e) => return provider_failure(e),
    };

    let articles = news_service::get_crypto_news(
        news_feed.get_ref(),
        &config.news_api_key,
        symbol,
        DEFAULT_ARTICLE_COUNT,
    )
    .await;

    let scored =
        sentiment_service::score_sentiment(&articles, &sentiment_service::default_weighted_terms());
    let (buy_signal, sell_signal) = signal_service::generate_signals(&candles, &scored);

    HttpResponse::Ok().json(serde_json::json!({
        "buy_signal": buy_signal,
        "sell_signal": sell_signal
    }))
}

fn storage_failure(e: AppError) -> HttpResponse {
    log::error!("❌ Key store failure: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "error": e.to_string()
    }))
}

fn provider_failure(e: AppError) -> HttpResponse {
    log::error!("❌ Price history failure: {}", e);
    HttpResponse::BadGateway().json(serde_json::json!({
        "success": false,
        "error": e.to_string()
    }))
}
