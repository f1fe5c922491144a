use serde::{Deserialize, Serialize};

/// A news article as returned to clients. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// An article annotated with a sentiment score in [-1, 1].
#[derive(Debug, Serialize, Clone, utoipa::ToSchema)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub sentiment: f64,
}
