use serde::Serialize;

/// A single cell of an uploaded table, typed as literally as the parser
/// inferred it. No further coercion happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

/// Row/column representation of an uploaded file, column names preserved
/// verbatim. Unlike a fetched price series there is no chronological
/// guarantee here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}
