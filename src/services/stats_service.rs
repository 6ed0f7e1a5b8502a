use crate::models::{ColumnStats, DescriptiveStatsTable, PriceSeries};

/// Summarizes every numeric column of a price series into one row of
/// descriptive statistics: count, mean, sample std (N-1), min, quartiles
/// and max. The Date column never appears in the output, and row order of
/// the input is irrelevant here.
///
/// Empty input produces a table with no rows, never an error.
pub fn summarize(series: &PriceSeries) -> DescriptiveStatsTable {
    let rows = series
        .numeric_columns()
        .into_iter()
        .map(|(name, values)| column_stats(name, &values))
        .collect();

    DescriptiveStatsTable { rows }
}

fn column_stats(name: &str, values: &[f64]) -> ColumnStats {
    let count = values.len() as u64;

    if values.is_empty() {
        return ColumnStats {
            index: name.to_string(),
            count: 0,
            mean: None,
            std: None,
            min: None,
            p25: None,
            p50: None,
            p75: None,
            max: None,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    // Sample standard deviation; undefined for a single observation
    let std = if values.len() > 1 {
        let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        Some((sum_sq / (n - 1.0)).sqrt())
    } else {
        None
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    ColumnStats {
        index: name.to_string(),
        count,
        mean: Some(round2(mean)),
        std: std.map(round2),
        min: Some(round2(sorted[0])),
        p25: Some(round2(percentile(&sorted, 0.25))),
        p50: Some(round2(percentile(&sorted, 0.50))),
        p75: Some(round2(percentile(&sorted, 0.75))),
        max: Some(round2(sorted[sorted.len() - 1])),
    }
}

/// Linear interpolation between order statistics of a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Round to 2 decimal places, halves away from zero.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
