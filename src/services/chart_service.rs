use crate::models::{ChartSeries, PriceSeries};

/// Projects a price series into a chart-ready shape: dates on x, closing
/// prices on y, positionally aligned with the source rows.
pub fn project(series: &PriceSeries, ticker: &str) -> ChartSeries {
    ChartSeries {
        x: series.dates(),
        y: series.closes(),
        label: ticker.to_string(),
        title: format!("{} Price Time Series", ticker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::price_provider::OhlcBar;
    use chrono::NaiveDate;

    #[test]
    fn x_and_y_stay_aligned() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let bars = (0..7)
            .map(|i| OhlcBar {
                date: start + chrono::Duration::days(i),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0 + i as f64,
                volume: 5_000.0,
            })
            .collect();
        let series = PriceSeries::from_bars(bars);

        let chart = project(&series, "AAPL");
        assert_eq!(chart.x.len(), chart.y.len());
        assert_eq!(chart.x.len(), 7);
        // same row correspondence as the source table
        assert_eq!(chart.x[3], start + chrono::Duration::days(3));
        assert_eq!(chart.y[3], 103.0);
    }

    #[test]
    fn empty_series_projects_to_empty_chart() {
        let chart = project(&PriceSeries::empty(), "ZZZZINVALID");
        assert!(chart.x.is_empty());
        assert!(chart.y.is_empty());
        assert_eq!(chart.label, "ZZZZINVALID");
    }

    #[test]
    fn title_is_derived_from_ticker() {
        let chart = project(&PriceSeries::empty(), "MSFT");
        assert_eq!(chart.title, "MSFT Price Time Series");
    }
}
