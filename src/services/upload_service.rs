use anyhow::{Context, Result};
use base64::Engine;
use calamine::{Data, Reader};
use std::io::Cursor;

use crate::errors::AppError;
use crate::models::{CellValue, DataTable};

/// Decodes an uploaded file payload into a [`DataTable`].
///
/// `contents` is the browser upload format `"{content_type},{base64}"`.
/// The format is sniffed from the filename only: "csv" means CSV, "xls"
/// covers both legacy Excel and XLSX. Anything else, and any decode or
/// parse failure, is an unsupported upload; the detail stays server-side.
pub fn normalize(contents: &str, filename: &str) -> Result<DataTable, AppError> {
    let lower = filename.to_lowercase();

    let parsed = if lower.contains("csv") {
        decode_payload(contents).and_then(|bytes| parse_csv(&bytes))
    } else if lower.contains("xls") {
        decode_payload(contents).and_then(|bytes| parse_excel(&bytes))
    } else {
        return Err(AppError::UnsupportedUpload(format!(
            "unrecognized file extension: {}",
            filename
        )));
    };

    parsed.map_err(|e| AppError::UnsupportedUpload(format!("{}: {:#}", filename, e)))
}

fn decode_payload(contents: &str) -> Result<Vec<u8>> {
    let (_content_type, encoded) = contents
        .split_once(',')
        .context("payload is missing the content-type prefix")?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .context("payload is not valid base64")
}

fn parse_csv(bytes: &[u8]) -> Result<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns = reader
        .headers()
        .context("failed to read CSV header row")?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse CSV row")?;
        rows.push(record.iter().map(cell_from_text).collect());
    }

    Ok(DataTable { columns, rows })
}

fn parse_excel(bytes: &[u8]) -> Result<DataTable> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        calamine::open_workbook_auto_from_rs(cursor).context("failed to open workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("failed to read first sheet")?;

    let mut row_iter = range.rows();
    let columns = row_iter
        .next()
        .map(|header| header.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();

    let rows = row_iter
        .map(|row| row.iter().map(cell_from_excel).collect())
        .collect();

    Ok(DataTable { columns, rows })
}

fn cell_from_text(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else if let Ok(n) = field.parse::<f64>() {
        CellValue::Number(n)
    } else {
        CellValue::Text(field.to_string())
    }
}

fn cell_from_excel(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(body: &str) -> String {
        format!(
            "data:text/csv;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(body.as_bytes())
        )
    }

    #[test]
    fn csv_upload_keeps_literal_values() {
        let payload = encode("name,score\nalice,91.5\nbob,78\ncarol,not graded\n");
        let table = normalize(&payload, "results.csv").unwrap();

        assert_eq!(table.columns, vec!["name", "score"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Text("alice".to_string()),
                CellValue::Number(91.5)
            ]
        );
        assert_eq!(
            table.rows[1],
            vec![CellValue::Text("bob".to_string()), CellValue::Number(78.0)]
        );
        assert_eq!(
            table.rows[2],
            vec![
                CellValue::Text("carol".to_string()),
                CellValue::Text("not graded".to_string())
            ]
        );
    }

    #[test]
    fn blank_fields_stay_empty() {
        let payload = encode("a,b\n1,\n");
        let table = normalize(&payload, "sparse.csv").unwrap();
        assert_eq!(table.rows[0], vec![CellValue::Number(1.0), CellValue::Empty]);
    }

    #[test]
    fn extension_sniff_is_substring_based() {
        let payload = encode("a\n1\n");
        // "csv" anywhere in the name is enough, mirroring the upload zone
        assert!(normalize(&payload, "export.csv.bak").is_ok());
        assert!(normalize(&payload, "report.txt").is_err());
    }

    #[test]
    fn unrecognized_extension_is_rejected() {
        let err = normalize(&encode("a\n1\n"), "notes.pdf").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedUpload(_)));
    }

    #[test]
    fn payload_without_prefix_is_rejected() {
        let err = normalize("justsomegarbage", "data.csv").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedUpload(_)));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = normalize("data:text/csv;base64,!!!not-base64!!!", "data.csv").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedUpload(_)));
    }

    #[test]
    fn garbage_excel_payload_is_rejected() {
        let payload = format!(
            "data:application/vnd.ms-excel;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(b"this is not a workbook")
        );
        let err = normalize(&payload, "sheet.xlsx").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedUpload(_)));
    }
}
