use serde::Serialize;

/// Descriptive statistics for one numeric source column, every value
/// rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    /// Name of the source column this row summarizes.
    pub index: String,
    pub count: u64,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Transposed statistics table: one row per numeric source column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptiveStatsTable {
    pub rows: Vec<ColumnStats>,
}

impl DescriptiveStatsTable {
    /// Fixed output columns, in CSV header order.
    pub const COLUMNS: [&'static str; 9] = [
        "index", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ];
}
