use serde::Deserialize;
use std::str::FromStr;

use crate::errors::AppError;

/// Unit of the historical lookback window. Codes match the dashboard's
/// period dropdown values ("d", "mo", "y").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LookbackUnit {
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "mo")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl LookbackUnit {
    pub fn code(&self) -> &'static str {
        match self {
            LookbackUnit::Day => "d",
            LookbackUnit::Month => "mo",
            LookbackUnit::Year => "y",
        }
    }
}

impl FromStr for LookbackUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(LookbackUnit::Day),
            "mo" => Ok(LookbackUnit::Month),
            "y" => Ok(LookbackUnit::Year),
            other => Err(AppError::InvalidPeriod(format!(
                "unrecognized period unit '{}'",
                other
            ))),
        }
    }
}

/// A (count, unit) pair describing how far back to fetch history.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LookbackSpec {
    pub count: i64,
    pub unit: LookbackUnit,
}

impl LookbackSpec {
    pub fn new(count: i64, unit: LookbackUnit) -> Self {
        Self { count, unit }
    }

    /// Builds a spec from raw request parameters. Missing or non-positive
    /// counts and unknown units are rejected before any fetch happens.
    pub fn parse(count: Option<i64>, unit: Option<&str>) -> Result<Self, AppError> {
        let count = count
            .ok_or_else(|| AppError::InvalidPeriod("missing period count".to_string()))?;
        let unit = unit
            .ok_or_else(|| AppError::InvalidPeriod("missing period unit".to_string()))?
            .parse::<LookbackUnit>()?;
        let spec = Self::new(count, unit);
        spec.resolve()?;
        Ok(spec)
    }

    /// Resolves the spec into the provider's range token, e.g. "3y" or "6mo".
    pub fn resolve(&self) -> Result<String, AppError> {
        if self.count < 1 {
            return Err(AppError::InvalidPeriod(format!(
                "period count must be a positive integer, got {}",
                self.count
            )));
        }
        Ok(format!("{}{}", self.count, self.unit.code()))
    }
}
