//! Save Rental Use Case
//!
//! Inserts a new rental or updates an existing one, depending on whether it
//! carries an ID.

use std::sync::Arc;

use crate::domain::gateways::RentalRepository;
use crate::domain::models::Rental;
use crate::shared::errors::UseCaseError;

/// Use case for persisting a rental
pub struct SaveRentalUseCase {
    rental_repository: Arc<dyn RentalRepository>,
}

impl SaveRentalUseCase {
    /// Create a new SaveRentalUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>) -> Self {
        Self { rental_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, rental: Rental) -> Result<Rental, UseCaseError> {
        match rental.id() {
            Some(id) => tracing::info!(rental_id = %id, "Updating rental"),
            None => tracing::info!(car_id = %rental.car().id(), "Creating new rental"),
        }

        let saved = self.rental_repository.save(&rental).await?;

        tracing::info!(
            rental_id = ?saved.id().map(|id| id.value()),
            equipment = saved.equipment().len(),
            "Rental saved successfully"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::MockRentalRepository;
    use crate::domain::models::fixtures::{date, rental};
    use crate::domain::models::RentalId;

    #[tokio::test]
    async fn should_assign_id_to_new_rental() {
        let repo = Arc::new(MockRentalRepository::new());

        let use_case = SaveRentalUseCase::new(repo.clone());
        let result = use_case.execute(rental(date(2021, 1, 1), date(2021, 1, 5))).await;

        let saved = result.unwrap();
        assert_eq!(saved.id(), Some(RentalId::new(1)));
        assert_eq!(repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_id_of_existing_rental() {
        let existing = rental(date(2021, 1, 1), date(2021, 1, 5)).with_id(RentalId::new(7));
        let repo = Arc::new(MockRentalRepository::new());

        let use_case = SaveRentalUseCase::new(repo.clone());
        let saved = use_case.execute(existing.clone()).await.unwrap();

        assert_eq!(saved, existing);
        assert_eq!(repo.saved(), vec![existing]);
    }
}
