//! Get Rentals Use Case
//!
//! Lists every rental. Clients are left as references.

use std::sync::Arc;

use crate::domain::gateways::{FetchPlan, RentalRepository};
use crate::domain::models::Rental;
use crate::shared::errors::UseCaseError;

/// Use case for listing all rentals
pub struct GetRentalsUseCase {
    rental_repository: Arc<dyn RentalRepository>,
}

impl GetRentalsUseCase {
    /// Create a new GetRentalsUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>) -> Self {
        Self { rental_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Rental>, UseCaseError> {
        tracing::debug!("Getting all rentals");

        let rentals = self.rental_repository.find_all(FetchPlan::lazy_client()).await?;

        tracing::debug!(count = rentals.len(), "Found rentals");
        Ok(rentals)
    }
}
