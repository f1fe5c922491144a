use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crypto Insight Service API",
        version = "1.0.0",
        description = "API documentation for the Crypto Insight Service.\n\n**Authentication:** Data endpoints require a session established via POST /login; requests without a live session are redirected to /login.\n\n**Features:**\n- Username/password accounts with bcrypt hashing\n- Flat-file provider key storage\n- Cryptocurrency news with sentiment scores\n- Daily candlestick history and naive buy/sell signals"
    ),
    paths(
        // Auth endpoints
        crate::api::auth::login,
        crate::api::auth::signup,
        crate::api::auth::logout,

        // Health
        crate::api::health::health_check,

        // Keys
        crate::api::keys::update_keys,

        // Market data
        crate::api::market::charts,
        crate::api::market::market_data,
        crate::api::market::time_info,

        // News & signals
        crate::api::news::crypto_news,
        crate::api::news::news_bundle,
        crate::api::news::signal,
    ),
    components(
        schemas(
            crate::services::auth_service::CredentialsForm,
            crate::api::keys::ApiKeysForm,
            crate::api::health::HealthResponse,
            crate::models::ApiKeyConfig,
            crate::models::NewsArticle,
            crate::models::ScoredArticle,
            crate::models::Candle,
            crate::services::market_service::ChartSeriesResponse,
            crate::services::market_service::MarketSnapshot,
        )
    ),
    tags(
        (name = "Auth", description = "Signup, login and logout. Sessions are server-side, carried by a session_token cookie."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Keys", description = "Provider API key management. Keys gate the news and market-data endpoints."),
        (name = "Market", description = "Candlestick history and market snapshot endpoints."),
        (name = "News", description = "Cryptocurrency news, sentiment scores and derived buy/sell signals."),
    )
)]
pub struct ApiDoc;
