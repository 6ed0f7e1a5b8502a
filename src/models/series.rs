use chrono::NaiveDate;
use serde::Serialize;

use crate::external::price_provider::OhlcBar;

/// The numeric price/volume columns of a fetched series, in table order.
pub const NUMERIC_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// A fetched price history with an explicit Date column.
/// Rows are chronological ascending as returned by the provider.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    pub rows: Vec<OhlcBar>,
}

impl PriceSeries {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_bars(mut bars: Vec<OhlcBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self { rows: bars }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|b| b.close).collect()
    }

    /// Extracts each numeric column as (name, values). The Date column is
    /// deliberately absent. An empty series yields no columns at all.
    pub fn numeric_columns(&self) -> Vec<(&'static str, Vec<f64>)> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        NUMERIC_COLUMNS
            .iter()
            .map(|&name| {
                let values = self
                    .rows
                    .iter()
                    .map(|b| match name {
                        "Open" => b.open,
                        "High" => b.high,
                        "Low" => b.low,
                        "Close" => b.close,
                        _ => b.volume,
                    })
                    .collect();
                (name, values)
            })
            .collect()
    }
}

/// Minimal chart-ready projection of a price series: x/y are positionally
/// aligned, label is the ticker as submitted.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub label: String,
    pub title: String,
}
