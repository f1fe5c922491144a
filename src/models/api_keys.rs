use serde::{Deserialize, Serialize};

/// The single global provider-key record, stored as plain text (a known
/// gap of the flat-file format, kept for compatibility).
/// On-disk field names (`newsapi_key`, `coinmarketcap_key`) are the legacy
/// `api_keys.json` names.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, utoipa::ToSchema)]
pub struct ApiKeyConfig {
    #[serde(rename = "newsapi_key")]
    pub news_api_key: String,
    #[serde(rename = "coinmarketcap_key")]
    pub market_data_api_key: String,
}
