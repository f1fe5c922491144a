pub mod auth_service;
pub mod market_service;
pub mod news_service;
pub mod sentiment_service;
pub mod signal_service;
pub mod tips_service;

pub use market_service::*;
pub use news_service::*;
pub use sentiment_service::*;
pub use signal_service::*;
