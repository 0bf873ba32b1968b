//! Rate Provider Gateway
//!
//! Source of PLN conversion rates used when pricing a rental.

use async_trait::async_trait;

use crate::domain::models::rate::Rate;
use crate::shared::errors::RateError;

/// Supplies current PLN to USD/EUR multipliers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch a fresh rate snapshot
    async fn fetch_rates(&self) -> Result<Rate, RateError>;
}
