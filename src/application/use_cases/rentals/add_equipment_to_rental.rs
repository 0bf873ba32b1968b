//! Add Equipment To Rental Use Case
//!
//! Appends a catalogue item to a rental's equipment list.

use std::sync::Arc;

use crate::application::use_cases::equipment::GetEquipmentByIdUseCase;
use crate::domain::gateways::{FetchPlan, RentalRepository};
use crate::domain::models::{EquipmentId, Rental, RentalId};
use crate::shared::errors::UseCaseError;

/// Use case for adding equipment to a rental
pub struct AddEquipmentToRentalUseCase {
    rental_repository: Arc<dyn RentalRepository>,
    get_equipment: Arc<GetEquipmentByIdUseCase>,
}

impl AddEquipmentToRentalUseCase {
    /// Create a new AddEquipmentToRentalUseCase
    #[must_use]
    pub fn new(rental_repository: Arc<dyn RentalRepository>, get_equipment: Arc<GetEquipmentByIdUseCase>) -> Self {
        Self {
            rental_repository,
            get_equipment,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental or the equipment doesn't exist.
    /// Returns `UseCaseError::Domain` if the rental is already at its equipment limit.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, rental_id: RentalId, equipment_id: EquipmentId) -> Result<Rental, UseCaseError> {
        tracing::info!(rental_id = %rental_id, equipment_id = %equipment_id, "Adding equipment to rental");

        let mut rental = self
            .rental_repository
            .find_by_id(rental_id, FetchPlan::eager())
            .await?
            .ok_or_else(|| {
                tracing::warn!(rental_id = %rental_id, "Rental not found for equipment change");
                UseCaseError::not_found("Rental", rental_id)
            })?;
        let equipment = self.get_equipment.execute(equipment_id).await?;

        rental.add_equipment(equipment)?;
        let saved = self.rental_repository.save(&rental).await?;

        tracing::info!(
            rental_id = %rental_id,
            equipment = saved.equipment().len(),
            "Equipment added to rental"
        );
        Ok(saved)
    }
}
