mod lookback;
mod series;
mod stats;
mod table;

pub use lookback::{LookbackSpec, LookbackUnit};
pub use series::{ChartSeries, PriceSeries};
pub use stats::{ColumnStats, DescriptiveStatsTable};
pub use table::{CellValue, DataTable};
