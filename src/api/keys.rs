use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;

use crate::api::pages;
use crate::storage::ApiKeyStore;

/// Form body for key updates. Field names match the legacy HTML form and
/// the on-disk document.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ApiKeysForm {
    pub newsapi_key: String,
    pub coinmarketcap_key: String,
}

pub async fn show_keys(keys: web::Data<ApiKeyStore>) -> HttpResponse {
    log::info!("🔑 GET /api_keys");

    match keys.load() {
        Ok(config) => pages::api_keys_form(&config.news_api_key, &config.market_data_api_key),
        Err(e) => {
            log::error!("❌ Failed to load api keys: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api_keys",
    tag = "Keys",
    request_body(content = ApiKeysForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Keys saved, redirect to /dashboard"),
        (status = 500, description = "Key store unwritable")
    )
)]
pub async fn update_keys(
    keys: web::Data<ApiKeyStore>,
    form: web::Form<ApiKeysForm>,
) -> HttpResponse {
    log::info!("🔑 POST /api_keys");

    match keys.save(&form.newsapi_key, &form.coinmarketcap_key) {
        Ok(()) => {
            log::info!("✅ Provider keys updated");
            HttpResponse::Found()
                .append_header((header::LOCATION, "/dashboard"))
                .finish()
        }
        Err(e) => {
            log::error!("❌ Failed to save api keys: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
