//! Calculate Rental Price Use Case
//!
//! Fetches current rates, recomputes a rental's total price and stores it.

use std::sync::Arc;

use crate::domain::gateways::{FetchPlan, RateProvider, RentalRepository};
use crate::domain::models::{Rental, RentalId};
use crate::shared::errors::UseCaseError;

/// Use case for pricing a rental in its currency
pub struct CalculateRentalPriceUseCase {
    rental_repository: Arc<dyn RentalRepository>,
    rate_provider: Arc<dyn RateProvider>,
}

impl CalculateRentalPriceUseCase {
    /// Create a new CalculateRentalPriceUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>, rate_provider: Arc<dyn RateProvider>) -> Self {
        Self {
            rental_repository,
            rate_provider,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental doesn't exist.
    /// Returns `UseCaseError::Rate` if rates cannot be fetched.
    /// Returns `UseCaseError::Domain` if the rental period is invalid.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: RentalId) -> Result<Rental, UseCaseError> {
        tracing::info!(rental_id = %id, "Calculating rental price");

        let mut rental = self
            .rental_repository
            .find_by_id(id, FetchPlan::eager())
            .await?
            .ok_or_else(|| {
                tracing::warn!(rental_id = %id, "Rental not found for pricing");
                UseCaseError::not_found("Rental", id)
            })?;

        let rate = self.rate_provider.fetch_rates().await?;
        let total = rental.calculate_total_price(&rate)?;
        let saved = self.rental_repository.save(&rental).await?;

        tracing::info!(
            rental_id = %id,
            currency = %saved.currency(),
            total_price = %total,
            days = saved.number_of_days_for_rent(),
            "Rental priced"
        );
        Ok(saved)
    }
}
