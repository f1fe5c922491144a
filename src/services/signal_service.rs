use crate::models::{Candle, ScoredArticle};
use crate::services::sentiment_service;

/// Closes averaged for the trend check.
const TREND_WINDOW: usize = 20;
/// Mean sentiment must clear this margin before a signal fires.
const SENTIMENT_THRESHOLD: f64 = 0.05;

/// Derives a `(buy, sell)` pair from price trend and scored news.
///
/// A buy needs the last close above its moving average AND positive mean
/// sentiment; a sell needs the mirror image. Mixed evidence yields no
/// signal, as does a history too short to establish a trend.
pub fn generate_signals(candles: &[Candle], scored: &[ScoredArticle]) -> (bool, bool) {
    if candles.len() < 2 {
        return (false, false);
    }

    let momentum = trend_momentum(candles);
    let sentiment = sentiment_service::mean_sentiment(scored);

    let buy = momentum > 0.0 && sentiment > SENTIMENT_THRESHOLD;
    let sell = momentum < 0.0 && sentiment < -SENTIMENT_THRESHOLD;
    (buy, sell)
}

/// Last close relative to the trailing simple moving average, as a
/// fraction of the average. Positive means the price sits above trend.
pub fn trend_momentum(candles: &[Candle]) -> f64 {
    let window = candles.len().min(TREND_WINDOW);
    let tail = &candles[candles.len() - window..];
    let sma = tail.iter().map(|c| c.close).sum::<f64>() / window as f64;
    if sma == 0.0 {
        return 0.0;
    }

    let last = tail.last().map(|c| c.close).unwrap_or(0.0);
    (last - sma) / sma
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsArticle;
    use crate::services::sentiment_service::{default_weighted_terms, score_sentiment};

    fn candles(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| Candle {
                date: format!("2024-01-{:02}", i + 1),
                open: *close,
                high: close + 1.0,
                low: close - 1.0,
                close: *close,
                volume: 1000.0,
            })
            .collect()
    }

    fn scored_news(text: &str) -> Vec<ScoredArticle> {
        let articles = vec![NewsArticle {
            title: text.to_string(),
            description: String::new(),
            url: "#".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
        }];
        score_sentiment(&articles, &default_weighted_terms())
    }

    #[test]
    fn rising_prices_and_positive_news_signal_buy() {
        let history = candles(&[100.0, 102.0, 104.0, 106.0, 110.0]);
        let news = scored_news("bullish rally continues with record gains");

        assert_eq!(generate_signals(&history, &news), (true, false));
    }

    #[test]
    fn falling_prices_and_negative_news_signal_sell() {
        let history = candles(&[110.0, 106.0, 104.0, 102.0, 96.0]);
        let news = scored_news("bearish crash deepens as fear spreads");

        assert_eq!(generate_signals(&history, &news), (false, true));
    }

    #[test]
    fn mixed_evidence_yields_no_signal() {
        let rising = candles(&[100.0, 102.0, 104.0, 106.0, 110.0]);
        let bad_news = scored_news("bearish crash deepens as fear spreads");

        assert_eq!(generate_signals(&rising, &bad_news), (false, false));
    }

    #[test]
    fn short_history_yields_no_signal() {
        let history = candles(&[100.0]);
        let news = scored_news("bullish rally continues");

        assert_eq!(generate_signals(&history, &news), (false, false));
    }

    #[test]
    fn empty_news_is_neutral_and_never_fires() {
        let rising = candles(&[100.0, 102.0, 104.0, 106.0, 110.0]);
        assert_eq!(generate_signals(&rising, &[]), (false, false));
    }

    #[test]
    fn momentum_sign_tracks_price_direction() {
        assert!(trend_momentum(&candles(&[100.0, 102.0, 110.0])) > 0.0);
        assert!(trend_momentum(&candles(&[110.0, 102.0, 96.0])) < 0.0);
    }
}
