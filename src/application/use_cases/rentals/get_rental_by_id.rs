//! Get Rental By ID Use Case
//!
//! Retrieves a single rental with all of its associations loaded.

use std::sync::Arc;

use crate::domain::gateways::{FetchPlan, RentalRepository};
use crate::domain::models::{Rental, RentalId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a rental by ID
pub struct GetRentalByIdUseCase {
    rental_repository: Arc<dyn RentalRepository>,
}

impl GetRentalByIdUseCase {
    /// Create a new GetRentalByIdUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>) -> Self {
        Self { rental_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: RentalId) -> Result<Rental, UseCaseError> {
        tracing::debug!(rental_id = %id, "Getting rental by ID");

        let rental = self
            .rental_repository
            .find_by_id(id, FetchPlan::eager())
            .await?
            .ok_or_else(|| {
                tracing::warn!(rental_id = %id, "Rental not found");
                UseCaseError::not_found("Rental", id)
            })?;

        tracing::debug!(rental_id = %id, "Rental found");
        Ok(rental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::MockRentalRepository;
    use crate::domain::models::fixtures::{date, rental};
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_rental_when_found() {
        let stored = rental(date(2021, 1, 1), date(2021, 1, 5)).with_id(RentalId::new(1));
        let repo = Arc::new(MockRentalRepository::new().with_find_by_id(Ok(Some(stored.clone()))));

        let use_case = GetRentalByIdUseCase::new(repo.clone());
        let result = use_case.execute(RentalId::new(1)).await;

        assert_eq!(result.unwrap(), stored);
        assert_eq!(repo.plans(), vec![FetchPlan::eager()]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_rental_does_not_exist() {
        let repo = Arc::new(MockRentalRepository::new().with_find_by_id(Ok(None)));

        let use_case = GetRentalByIdUseCase::new(repo);
        let result = use_case.execute(RentalId::new(1)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let repo = Arc::new(
            MockRentalRepository::new()
                .with_find_by_id(Err(RepositoryError::Mapping("bad currency".to_string()))),
        );

        let use_case = GetRentalByIdUseCase::new(repo);
        let result = use_case.execute(RentalId::new(1)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
