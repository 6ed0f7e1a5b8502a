pub(crate) mod health;
pub(crate) mod series;
pub(crate) mod uploads;
