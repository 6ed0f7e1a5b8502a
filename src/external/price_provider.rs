use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// One daily OHLCV bar as returned by the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OhlcBar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown symbol")]
    NotFound,

    #[error("rate limited")]
    RateLimited,
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetches daily bars for `ticker` over a lookback range token such as
    /// "5d", "6mo" or "3y". Bars come back chronological ascending.
    async fn fetch_history(
        &self,
        ticker: &str,
        range: &str,
    ) -> Result<Vec<OhlcBar>, PriceProviderError>;
}
