use crate::external::price_provider::PriceProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub price_provider: Arc<dyn PriceProvider>,
}
