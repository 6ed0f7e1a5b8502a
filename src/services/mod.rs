pub(crate) mod chart_service;
pub(crate) mod export_service;
pub(crate) mod series_service;
pub(crate) mod stats_service;
pub(crate) mod upload_service;
