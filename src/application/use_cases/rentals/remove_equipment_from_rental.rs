//! Remove Equipment From Rental Use Case
//!
//! Removes the first entry equal to the looked-up catalogue item.

use std::sync::Arc;

use crate::application::use_cases::equipment::GetEquipmentByIdUseCase;
use crate::domain::gateways::{FetchPlan, RentalRepository};
use crate::domain::models::{EquipmentId, Rental, RentalId};
use crate::shared::errors::UseCaseError;

/// Use case for removing equipment from a rental
pub struct RemoveEquipmentFromRentalUseCase {
    rental_repository: Arc<dyn RentalRepository>,
    get_equipment: Arc<GetEquipmentByIdUseCase>,
}

impl RemoveEquipmentFromRentalUseCase {
    /// Create a new RemoveEquipmentFromRentalUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>, get_equipment: Arc<GetEquipmentByIdUseCase>) -> Self {
        Self {
            rental_repository,
            get_equipment,
        }
    }

    /// Execute the use case
    ///
    /// The rental is persisted even when it held no matching entry.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental or the equipment doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, rental_id: RentalId, equipment_id: EquipmentId) -> Result<Rental, UseCaseError> {
        tracing::info!(rental_id = %rental_id, equipment_id = %equipment_id, "Removing equipment from rental");

        let mut rental = self
            .rental_repository
            .find_by_id(rental_id, FetchPlan::eager())
            .await?
            .ok_or_else(|| {
                tracing::warn!(rental_id = %rental_id, "Rental not found for equipment change");
                UseCaseError::not_found("Rental", rental_id)
            })?;
        let equipment = self.get_equipment.execute(equipment_id).await?;

        if !rental.remove_equipment(&equipment) {
            tracing::warn!(
                rental_id = %rental_id,
                equipment_id = %equipment_id,
                "Rental does not hold this equipment"
            );
        }
        let saved = self.rental_repository.save(&rental).await?;

        tracing::info!(
            rental_id = %rental_id,
            equipment = saved.equipment().len(),
            "Equipment removed from rental"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{MockEquipmentRepository, MockRentalRepository};
    use crate::domain::models::fixtures::{baby_seat, date, kangoo, malkovich, rental, trailer};

    fn use_case(repo: Arc<MockRentalRepository>) -> RemoveEquipmentFromRentalUseCase {
        let catalogue = Arc::new(MockEquipmentRepository::new(vec![baby_seat(), trailer()]));
        RemoveEquipmentFromRentalUseCase::new(repo, Arc::new(GetEquipmentByIdUseCase::new(catalogue)))
    }

    fn rental_with_seat_and_trailer() -> Rental {
        Rental::builder()
            .id(RentalId::new(2))
            .rent_date(date(2021, 1, 1))
            .return_date(date(2021, 1, 5))
            .car(kangoo())
            .client(malkovich())
            .equipment(baby_seat())
            .equipment(trailer())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_remove_matching_equipment() {
        let repo = Arc::new(
            MockRentalRepository::new().with_find_by_id(Ok(Some(rental_with_seat_and_trailer()))),
        );

        let updated = use_case(repo.clone())
            .execute(RentalId::new(2), trailer().id())
            .await
            .unwrap();

        assert_eq!(updated.equipment().len(), 1);
        assert!(updated.equipment().iter().all(|e| e.id() != trailer().id()));
        assert_eq!(repo.saved()[0].equipment(), &[baby_seat()]);
    }

    #[tokio::test]
    async fn should_leave_list_unchanged_when_equipment_not_attached() {
        let stored = rental(date(2021, 1, 1), date(2021, 1, 5)).with_id(RentalId::new(2));
        let repo = Arc::new(MockRentalRepository::new().with_find_by_id(Ok(Some(stored))));

        let updated = use_case(repo)
            .execute(RentalId::new(2), trailer().id())
            .await
            .unwrap();

        assert!(updated.equipment().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_rental_does_not_exist() {
        let repo = Arc::new(MockRentalRepository::new().with_find_by_id(Ok(None)));

        let result = use_case(repo.clone())
            .execute(RentalId::new(2), trailer().id())
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_equipment_does_not_exist() {
        let repo = Arc::new(
            MockRentalRepository::new().with_find_by_id(Ok(Some(rental_with_seat_and_trailer()))),
        );

        let result = use_case(repo.clone())
            .execute(RentalId::new(2), EquipmentId::new(99))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::NotFound { resource, .. } if resource == "Equipment"
        ));
        assert!(repo.saved().is_empty());
    }
}
