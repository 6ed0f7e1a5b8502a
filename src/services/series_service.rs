use tracing::{info, warn};

use crate::errors::AppError;
use crate::external::price_provider::{OhlcBar, PriceProvider, PriceProviderError};
use crate::models::{LookbackSpec, PriceSeries};

/// Fetches the price history for a ticker over the requested lookback
/// window and normalizes it into a [`PriceSeries`].
///
/// A blank ticker short-circuits to an empty series without touching the
/// provider. An invalid lookback fails before any fetch. Unknown symbols
/// and provider faults both normalize to an empty series so the dashboard
/// renders empty results instead of crashing; only rate limiting surfaces
/// as an error so clients can back off.
pub async fn fetch_series(
    provider: &dyn PriceProvider,
    ticker: &str,
    spec: &LookbackSpec,
) -> Result<PriceSeries, AppError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Ok(PriceSeries::empty());
    }

    let range = spec.resolve()?;

    match fetch_with_retry(provider, ticker, &range).await {
        Ok(bars) => {
            if bars.is_empty() {
                info!("No data available for {} over {}", ticker, range);
            }
            Ok(PriceSeries::from_bars(bars))
        }
        Err(PriceProviderError::RateLimited) => Err(AppError::RateLimited),
        Err(PriceProviderError::NotFound) => {
            info!("No data available for {} (unknown symbol)", ticker);
            Ok(PriceSeries::empty())
        }
        Err(e) => {
            warn!("Provider failure for {}: {}. Rendering empty results.", ticker, e);
            Ok(PriceSeries::empty())
        }
    }
}

/// Single retry on transient network errors only. Bad responses, unknown
/// symbols and rate limits are not retried.
async fn fetch_with_retry(
    provider: &dyn PriceProvider,
    ticker: &str,
    range: &str,
) -> Result<Vec<OhlcBar>, PriceProviderError> {
    match provider.fetch_history(ticker, range).await {
        Err(PriceProviderError::Network(msg)) => {
            warn!("Network error fetching {}: {}. Retrying once.", ticker, msg);
            provider.fetch_history(ticker, range).await
        }
        other => other,
    }
}
