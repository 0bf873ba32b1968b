//! Delete Rental Use Case
//!
//! Deleting a rental that does not exist is not an error.

use std::sync::Arc;

use crate::domain::gateways::RentalRepository;
use crate::domain::models::RentalId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a rental
pub struct DeleteRentalUseCase {
    rental_repository: Arc<dyn RentalRepository>,
}

impl DeleteRentalUseCase {
    /// Create a new DeleteRentalUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>) -> Self {
        Self { rental_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: RentalId) -> Result<(), UseCaseError> {
        tracing::info!(rental_id = %id, "Deleting rental");

        if self.rental_repository.delete_by_id(id).await? {
            tracing::info!(rental_id = %id, "Rental deleted successfully");
        } else {
            tracing::debug!(rental_id = %id, "No rental to delete");
        }

        Ok(())
    }
}
