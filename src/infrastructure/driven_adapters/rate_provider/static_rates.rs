//! Static Rate Provider
//!
//! Serves the same configured rates on every call. Used for local development
//! and wherever the NBP API is unreachable.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::gateways::RateProvider;
use crate::domain::models::Rate;
use crate::shared::errors::RateError;

pub struct StaticRateProvider {
    pln_usd: Decimal,
    pln_eur: Decimal,
}

impl StaticRateProvider {
    #[must_use]
    pub fn new(pln_usd: Decimal, pln_eur: Decimal) -> Self {
        Self { pln_usd, pln_eur }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn fetch_rates(&self) -> Result<Rate, RateError> {
        Ok(Rate::new(self.pln_usd, self.pln_eur))
    }
}
