use actix_web::web;

pub mod auth;
pub mod health;
pub mod keys;
pub mod market;
pub mod news;
pub mod pages;
pub mod swagger;

use crate::middleware::SessionGate;

/// Application route table, shared by the server binary and the tests.
/// Every endpoint that reads stored keys or fetches data sits behind the
/// session gate; only the entry flows and health stay public.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/", web::get().to(pages::home))
        .service(
            web::resource("/login")
                .route(web::get().to(pages::login_page))
                .route(web::post().to(auth::login)),
        )
        .service(
            web::resource("/signup")
                .route(web::get().to(pages::signup_page))
                .route(web::post().to(auth::signup)),
        )
        .route("/logout", web::get().to(auth::logout))
        .service(
            web::resource("/dashboard")
                .wrap(SessionGate)
                .route(web::get().to(pages::dashboard)),
        )
        .service(
            web::resource("/api_keys")
                .wrap(SessionGate)
                .route(web::get().to(keys::show_keys))
                .route(web::post().to(keys::update_keys)),
        )
        .service(
            web::resource("/crypto_news/{symbol}")
                .wrap(SessionGate)
                .route(web::get().to(news::crypto_news)),
        )
        .service(
            web::resource("/time")
                .wrap(SessionGate)
                .route(web::get().to(market::time_info)),
        )
        .service(
            web::resource("/charts")
                .wrap(SessionGate)
                .route(web::get().to(market::charts)),
        )
        .service(
            web::resource("/market_data")
                .wrap(SessionGate)
                .route(web::get().to(market::market_data)),
        )
        .service(
            web::resource("/news")
                .wrap(SessionGate)
                .route(web::get().to(news::news_bundle)),
        )
        .service(
            web::resource("/signal")
                .wrap(SessionGate)
                .route(web::get().to(news::signal)),
        );
}
