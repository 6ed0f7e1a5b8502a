use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::header;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ChartSeries, DescriptiveStatsTable, LookbackSpec, PriceSeries};
use crate::services::{chart_service, export_service, series_service, stats_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:ticker", get(get_analysis))
        .route("/:ticker/statistics.csv", get(download_statistics))
}

#[derive(Debug, Deserialize)]
pub struct LookbackQuery {
    pub count: Option<i64>,
    pub unit: Option<String>,
}

impl LookbackQuery {
    fn to_spec(&self) -> Result<LookbackSpec, AppError> {
        LookbackSpec::parse(self.count, self.unit.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub chart: ChartSeries,
    pub statistics: DescriptiveStatsTable,
}

pub async fn get_analysis(
    Path(ticker): Path<String>,
    Query(query): Query<LookbackQuery>,
    State(state): State<AppState>,
) -> Result<Json<AnalysisResponse>, AppError> {
    info!(
        "GET /series/{} - Analyzing price history (count={:?}, unit={:?})",
        ticker, query.count, query.unit
    );

    let series = fetch_for_request(&state, &ticker, &query).await?;
    let chart = chart_service::project(&series, ticker.trim());
    let statistics = stats_service::summarize(&series);

    Ok(Json(AnalysisResponse { chart, statistics }))
}

pub async fn download_statistics(
    Path(ticker): Path<String>,
    Query(query): Query<LookbackQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "GET /series/{}/statistics.csv - Exporting statistics (count={:?}, unit={:?})",
        ticker, query.count, query.unit
    );

    // Re-fetches on every download, same as the analysis path. No caching.
    let series = fetch_for_request(&state, &ticker, &query).await?;
    let statistics = stats_service::summarize(&series);
    let bytes = export_service::to_csv(&statistics).map_err(|e| {
        error!("Failed to serialize statistics for {}: {}", ticker, e);
        e
    })?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_service::EXPORT_FILENAME),
        ),
    ];

    Ok((headers, bytes))
}

async fn fetch_for_request(
    state: &AppState,
    ticker: &str,
    query: &LookbackQuery,
) -> Result<PriceSeries, AppError> {
    let spec = query.to_spec()?;
    series_service::fetch_series(state.price_provider.as_ref(), ticker, &spec)
        .await
        .map_err(|e| {
            match &e {
                AppError::RateLimited => error!("Rate limited while fetching {}", ticker),
                _ => error!("Failed to fetch series for {}: {}", ticker, e),
            }
            e
        })
}
