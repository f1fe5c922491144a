use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::models::NewsArticle;
use crate::utils::AppError;

const NEWSAPI_BASE: &str = "https://newsapi.org/v2";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_ARTICLE_COUNT: usize = 10;

/// Raw search payload from the news provider. Fields are optional on the
/// wire; defaults are applied in [`map_articles`].
#[derive(Debug, Deserialize)]
pub struct NewsSearchPayload {
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Outbound news search. Behind a trait so tests can substitute the
/// transport.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Issues a single search for English articles mentioning `query`,
    /// newest first, at most `page_size` results.
    async fn search(
        &self,
        api_key: &str,
        query: &str,
        page_size: usize,
    ) -> Result<NewsSearchPayload, AppError>;
}

pub struct NewsApiClient {
    client: reqwest::Client,
}

impl NewsApiClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build news HTTP client");
        Self { client }
    }
}

impl Default for NewsApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsFeed for NewsApiClient {
    async fn search(
        &self,
        api_key: &str,
        query: &str,
        page_size: usize,
    ) -> Result<NewsSearchPayload, AppError> {
        let url = format!(
            "{}/everything?q={}&apiKey={}&language=en&sortBy=publishedAt&pageSize={}",
            NEWSAPI_BASE,
            urlencoding::encode(query),
            urlencoding::encode(api_key),
            page_size
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("news request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "news provider returned {}",
                response.status()
            )));
        }

        response
            .json::<NewsSearchPayload>()
            .await
            .map_err(|e| AppError::Provider(format!("failed to parse news payload: {}", e)))
    }
}

/// Fetches news for a symbol. Any provider failure degrades to an empty
/// list and is logged at warn level, so "no data" and "upstream failure"
/// stay distinguishable in the logs.
pub async fn get_crypto_news(
    feed: &dyn NewsFeed,
    api_key: &str,
    symbol: &str,
    count: usize,
) -> Vec<NewsArticle> {
    match feed.search(api_key, symbol, count).await {
        Ok(payload) => {
            let articles = map_articles(payload, count);
            log::info!("📰 Retrieved {} articles for {}", articles.len(), symbol);
            articles
        }
        Err(e) => {
            log::warn!("⚠️ News fetch for {} degraded to empty list: {}", symbol, e);
            Vec::new()
        }
    }
}

/// Applies placeholder defaults for missing fields, orders newest first
/// and truncates to `count`. Providers that ignore the sort parameter are
/// re-sorted here.
pub fn map_articles(payload: NewsSearchPayload, count: usize) -> Vec<NewsArticle> {
    let mut articles: Vec<NewsArticle> = payload
        .articles
        .into_iter()
        .map(|raw| NewsArticle {
            title: raw.title.unwrap_or_else(|| "No Title".to_string()),
            description: raw.description.unwrap_or_else(|| "No Description".to_string()),
            url: raw.url.unwrap_or_else(|| "#".to_string()),
            published_at: raw.published_at.unwrap_or_else(|| "No Date".to_string()),
        })
        .collect();

    articles.sort_by_key(|a| std::cmp::Reverse(publish_timestamp(a)));
    articles.truncate(count);
    articles
}

/// Unparseable dates (including the placeholder) sort last.
fn publish_timestamp(article: &NewsArticle) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&article.published_at)
        .map(|dt| dt.timestamp())
        .unwrap_or(i64::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: Option<&str>, published_at: Option<&str>) -> RawArticle {
        RawArticle {
            title: title.map(String::from),
            description: Some("desc".to_string()),
            url: Some("https://example.com/a".to_string()),
            published_at: published_at.map(String::from),
        }
    }

    #[test]
    fn articles_are_ordered_newest_first_and_truncated() {
        let payload = NewsSearchPayload {
            articles: vec![
                raw(Some("old"), Some("2024-01-01T00:00:00Z")),
                raw(Some("new"), Some("2024-03-01T00:00:00Z")),
                raw(Some("mid"), Some("2024-02-01T00:00:00Z")),
            ],
        };

        let articles = map_articles(payload, 2);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "new");
        assert_eq!(articles[1].title, "mid");
    }

    #[test]
    fn missing_fields_become_literal_placeholders() {
        let payload = NewsSearchPayload {
            articles: vec![RawArticle::default()],
        };

        let articles = map_articles(payload, 10);
        assert_eq!(articles[0].title, "No Title");
        assert_eq!(articles[0].description, "No Description");
        assert_eq!(articles[0].url, "#");
        assert_eq!(articles[0].published_at, "No Date");
    }

    #[test]
    fn dateless_articles_sort_after_dated_ones() {
        let payload = NewsSearchPayload {
            articles: vec![
                raw(Some("undated"), None),
                raw(Some("dated"), Some("2024-01-01T00:00:00Z")),
            ],
        };

        let articles = map_articles(payload, 10);
        assert_eq!(articles[0].title, "dated");
        assert_eq!(articles[1].title, "undated");
    }

    struct FailingFeed;

    #[async_trait]
    impl NewsFeed for FailingFeed {
        async fn search(
            &self,
            _api_key: &str,
            _query: &str,
            _page_size: usize,
        ) -> Result<NewsSearchPayload, AppError> {
            Err(AppError::Provider("news provider returned 503".to_string()))
        }
    }

    #[tokio::test]
    async fn non_success_transport_degrades_to_empty_list() {
        let articles = get_crypto_news(&FailingFeed, "key", "BTC", 10).await;
        assert!(articles.is_empty());
    }
}
