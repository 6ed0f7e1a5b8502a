use crate::errors::AppError;
use crate::models::DescriptiveStatsTable;

/// Fixed download name for the statistics export.
pub const EXPORT_FILENAME: &str = "my_data.csv";

/// Serializes a statistics table to CSV bytes: one header row with the
/// statistic names, one data row per original column. Absent cells
/// serialize as empty fields so the payload round-trips cell-for-cell.
pub fn to_csv(stats: &DescriptiveStatsTable) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(DescriptiveStatsTable::COLUMNS)
        .map_err(|e| AppError::External(format!("CSV serialization failed: {}", e)))?;

    for row in &stats.rows {
        let record = [
            row.index.clone(),
            row.count.to_string(),
            fmt_cell(row.mean),
            fmt_cell(row.std),
            fmt_cell(row.min),
            fmt_cell(row.p25),
            fmt_cell(row.p50),
            fmt_cell(row.p75),
            fmt_cell(row.max),
        ];
        writer
            .write_record(&record)
            .map_err(|e| AppError::External(format!("CSV serialization failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::External(format!("CSV serialization failed: {}", e)))
}

fn fmt_cell(value: Option<f64>) -> String {
    // f64 Display is the shortest round-tripping representation
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnStats;

    fn sample_table() -> DescriptiveStatsTable {
        DescriptiveStatsTable {
            rows: vec![
                ColumnStats {
                    index: "Close".to_string(),
                    count: 252,
                    mean: Some(187.43),
                    std: Some(12.01),
                    min: Some(164.08),
                    p25: Some(178.5),
                    p50: Some(188.22),
                    p75: Some(195.99),
                    max: Some(210.73),
                },
                ColumnStats {
                    index: "Volume".to_string(),
                    count: 1,
                    mean: Some(58000000.0),
                    std: None,
                    min: Some(58000000.0),
                    p25: Some(58000000.0),
                    p50: Some(58000000.0),
                    p75: Some(58000000.0),
                    max: Some(58000000.0),
                },
            ],
        }
    }

    fn parse_csv(bytes: &[u8]) -> DescriptiveStatsTable {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);
        let rows = reader
            .records()
            .map(|record| {
                let record = record.unwrap();
                let cell = |i: usize| -> Option<f64> {
                    let field = record.get(i).unwrap();
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.parse().unwrap())
                    }
                };
                ColumnStats {
                    index: record.get(0).unwrap().to_string(),
                    count: record.get(1).unwrap().parse().unwrap(),
                    mean: cell(2),
                    std: cell(3),
                    min: cell(4),
                    p25: cell(5),
                    p50: cell(6),
                    p75: cell(7),
                    max: cell(8),
                }
            })
            .collect();
        DescriptiveStatsTable { rows }
    }

    #[test]
    fn header_row_lists_the_statistic_names() {
        let bytes = to_csv(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "index,count,mean,std,min,25%,50%,75%,max");
    }

    #[test]
    fn round_trips_cell_for_cell() {
        let table = sample_table();
        let bytes = to_csv(&table).unwrap();
        assert_eq!(parse_csv(&bytes), table);
    }

    #[test]
    fn empty_table_serializes_to_header_only() {
        let bytes = to_csv(&DescriptiveStatsTable::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn absent_std_becomes_an_empty_field() {
        let bytes = to_csv(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let volume_line = text.lines().find(|l| l.starts_with("Volume")).unwrap();
        assert_eq!(volume_line, "Volume,1,58000000,,58000000,58000000,58000000,58000000,58000000");
    }
}
