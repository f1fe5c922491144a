use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crypto_insight_service::api;
use crypto_insight_service::middleware::SecurityHeaders;
use crypto_insight_service::services::market_service::{
    PriceFeed, SnapshotFeed, UnsupportedSnapshotClient, YahooChartClient,
};
use crypto_insight_service::services::news_service::{NewsApiClient, NewsFeed};
use crypto_insight_service::session::SessionStore;
use crypto_insight_service::storage::{ApiKeyStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

    log::info!("🚀 Starting Crypto Insight Service...");
    log::info!("📁 Data directory: {}", data_dir.display());

    // Flat-file stores and the in-process session registry
    let users = web::Data::new(UserStore::new(&data_dir));
    let api_keys = web::Data::new(ApiKeyStore::new(&data_dir));
    let sessions = web::Data::new(SessionStore::new());

    // Provider clients
    let news_feed: web::Data<dyn NewsFeed> =
        web::Data::from(Arc::new(NewsApiClient::new()) as Arc<dyn NewsFeed>);
    let price_feed: web::Data<dyn PriceFeed> =
        web::Data::from(Arc::new(YahooChartClient::new()) as Arc<dyn PriceFeed>);
    let snapshot_feed: web::Data<dyn SnapshotFeed> =
        web::Data::from(Arc::new(UnsupportedSnapshotClient) as Arc<dyn SnapshotFeed>);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(users.clone())
            .app_data(api_keys.clone())
            .app_data(sessions.clone())
            .app_data(news_feed.clone())
            .app_data(price_feed.clone())
            .app_data(snapshot_feed.clone())
            .wrap(cors)
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::routes)
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
