pub(crate) mod price_provider;
pub(crate) mod yahoo;
