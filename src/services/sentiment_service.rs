use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::{NewsArticle, ScoredArticle};

lazy_static! {
    /// Signed word weights for general financial polarity.
    static ref POLARITY_LEXICON: HashMap<&'static str, f64> = {
        let mut lexicon = HashMap::new();
        for (word, weight) in [
            // positive
            ("bullish", 0.8),
            ("surge", 0.7),
            ("rally", 0.7),
            ("soar", 0.8),
            ("gain", 0.5),
            ("profit", 0.6),
            ("growth", 0.6),
            ("rise", 0.5),
            ("record", 0.6),
            ("adoption", 0.5),
            ("breakout", 0.6),
            ("rebound", 0.5),
            ("upgrade", 0.6),
            ("recovery", 0.5),
            // negative
            ("bearish", -0.8),
            ("crash", -0.9),
            ("plunge", -0.8),
            ("drop", -0.6),
            ("fall", -0.5),
            ("decline", -0.6),
            ("loss", -0.6),
            ("weak", -0.5),
            ("fear", -0.6),
            ("hack", -0.8),
            ("scam", -0.9),
            ("selloff", -0.7),
            ("ban", -0.7),
            ("lawsuit", -0.6),
        ] {
            lexicon.insert(word, weight);
        }
        lexicon
    };
}

/// The term weights used by the news/signal endpoints.
pub fn default_weighted_terms() -> HashMap<String, f64> {
    HashMap::from([
        ("cryptocurrency".to_string(), 0.5),
        ("bullish".to_string(), 0.4),
        ("bearish".to_string(), -0.4),
    ])
}

/// Annotates each article with a sentiment score over its title and
/// description.
pub fn score_sentiment(
    articles: &[NewsArticle],
    weighted_terms: &HashMap<String, f64>,
) -> Vec<ScoredArticle> {
    articles
        .iter()
        .map(|article| {
            let text = format!("{} {}", article.title, article.description);
            ScoredArticle {
                article: article.clone(),
                sentiment: score_text(&text, weighted_terms),
            }
        })
        .collect()
}

/// Scores one text: lexicon polarity averaged over matched words, plus a
/// one-shot signed bonus per configured term present. Clamped to [-1, 1].
/// Text with no matches scores 0.
pub fn score_text(text: &str, weighted_terms: &HashMap<String, f64>) -> f64 {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut matched = 0usize;
    let mut polarity_sum = 0.0;
    for token in &tokens {
        if let Some(weight) = POLARITY_LEXICON.get(token) {
            matched += 1;
            polarity_sum += weight;
        }
    }
    let polarity = if matched > 0 {
        polarity_sum / matched as f64
    } else {
        0.0
    };

    let mut term_bonus = 0.0;
    for (term, weight) in weighted_terms {
        if tokens.iter().any(|t| *t == term.as_str()) {
            term_bonus += weight;
        }
    }

    (polarity + term_bonus).clamp(-1.0, 1.0)
}

/// Mean article score; an empty batch is neutral.
pub fn mean_sentiment(scored: &[ScoredArticle]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    scored.iter().map(|s| s.sentiment).sum::<f64>() / scored.len() as f64
}
